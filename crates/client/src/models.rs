//! Request and response bodies that only the client needs.

use serde::{Deserialize, Serialize};

use inspecta_core::inspection::InspectionStatus;
use inspecta_shared::types::{PageRequest, UserId};
use inspecta_shared::Role;

/// A user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// User ID.
    pub id: UserId,
    /// Display name.
    pub user_name: String,
    /// Login email.
    pub email: String,
    /// Employee number.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// Branch the user belongs to.
    #[serde(default)]
    pub branch_name: Option<String>,
    /// Account role.
    pub role: Role,
    /// Whether the account may sign in.
    #[serde(default = "active")]
    pub is_active: bool,
}

const fn active() -> bool {
    true
}

/// Request body for creating a branch admin or an inspector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    /// Display name.
    pub user_name: String,
    /// Login email.
    pub email: String,
    /// Initial password.
    pub password: String,
    /// Employee number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    /// Branch the user belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_name: Option<String>,
    /// Role of the new account. Only branch admin and inspector accounts can
    /// be created.
    pub role: Role,
}

/// Partial update of a user account. Unset fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateUserRequest {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// New login email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// New employee number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    /// Move the user to another branch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_name: Option<String>,
    /// Enable or disable sign-in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Counts shown on an inspector's dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct InspectorStats {
    pub total: u64,
    pub pending: u64,
    pub in_progress: u64,
    pub completed: u64,
    pub approved: u64,
    pub rejected: u64,
}

/// Counts shown on the admin and branch admin dashboards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct InspectionCounts {
    pub all: u64,
    pub pending: u64,
    pub approved: u64,
    pub rejected: u64,
}

/// Filters for listing inspections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InspectionQuery {
    /// Only inspections with this status.
    pub status: Option<InspectionStatus>,
    /// Free-text search.
    pub search: Option<String>,
    /// Only inspections of this branch.
    pub branch_name: Option<String>,
    /// Page to fetch. Without it the backend returns everything.
    pub page: Option<PageRequest>,
}

impl InspectionQuery {
    /// Returns the query pairs sent to the backend. Blank filters are left out.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        let text_filters = [("search", &self.search), ("branch_name", &self.branch_name)];
        for (key, value) in text_filters {
            if let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
                pairs.push((key, value.to_string()));
            }
        }
        if let Some(page) = self.page {
            pairs.extend(page.query_pairs());
        }
        pairs
    }
}

/// Request body for changing an inspection's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    /// The new status.
    pub status: InspectionStatus,
}

/// Request body for assigning an inspector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignInspectorRequest {
    /// The inspector to assign.
    pub inspector_id: UserId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_pairs_skip_blank_filters() {
        let query = InspectionQuery {
            status: Some(InspectionStatus::InProgress),
            search: Some("  ".to_string()),
            branch_name: Some(" Motijheel ".to_string()),
            page: Some(PageRequest::new(2, 50)),
        };
        assert_eq!(
            query.query_pairs(),
            vec![
                ("status", "In Progress".to_string()),
                ("branch_name", "Motijheel".to_string()),
                ("page", "2".to_string()),
                ("page_size", "50".to_string()),
            ]
        );
        assert!(InspectionQuery::default().query_pairs().is_empty());
    }

    #[test]
    fn test_update_user_sends_only_set_fields() {
        let changes = UpdateUserRequest {
            branch_name: Some("Gulshan".to_string()),
            is_active: Some(false),
            ..UpdateUserRequest::default()
        };
        assert_eq!(
            serde_json::to_value(&changes).unwrap(),
            serde_json::json!({"branch_name": "Gulshan", "is_active": false})
        );
    }

    #[test]
    fn test_user_record_defaults() {
        let user: UserRecord = serde_json::from_value(serde_json::json!({
            "id": 3,
            "user_name": "karim",
            "email": "karim@example.org",
            "role": "branch_admin"
        }))
        .unwrap();
        assert_eq!(user.role, Role::BranchAdmin);
        assert!(user.is_active);
        assert!(user.branch_name.is_none());
    }
}
