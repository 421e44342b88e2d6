//! Inspection records, statuses and assignments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use inspecta_shared::types::{AssignmentId, InspectionId, UserId};

use super::form::InspectionForm;
use crate::location::TrailPayload;

/// Review status of a submitted inspection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InspectionStatus {
    /// Submitted, not reviewed yet.
    #[default]
    Pending,
    /// Under review.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Review finished.
    Completed,
    /// Accepted by the branch.
    Approved,
    /// Sent back.
    Rejected,
}

impl InspectionStatus {
    /// Every status, in workflow order.
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::InProgress,
        Self::Completed,
        Self::Approved,
        Self::Rejected,
    ];

    /// The backend's spelling of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

impl std::fmt::Display for InspectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for InspectionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace(['_', '-'], " ");
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| format!("Invalid status: {s}"))
    }
}

/// Status of an assignment handed to an inspector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum AssignmentStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Approved,
    Rejected,
}

/// An inspection assigned to an inspector by an admin or branch admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewInspection {
    /// Assignment ID.
    pub id: AssignmentId,
    /// Project the inspection belongs to.
    pub project: String,
    /// Client to visit.
    pub client_name: String,
    /// Client's industry.
    pub industry_name: String,
    /// Client contact number.
    pub phone_number: String,
    /// Inspector the visit is assigned to.
    pub assigned_inspector: UserId,
    /// Inspector's display name.
    #[serde(default)]
    pub assigned_inspector_name: Option<String>,
    /// Branch that owns the assignment.
    pub branch_name: String,
    /// Assignment status.
    #[serde(default)]
    pub status: AssignmentStatus,
    /// When the assignment was made.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last change.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Request body for creating an assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct NewInspectionRequest {
    pub project: String,
    pub client_name: String,
    pub industry_name: String,
    pub phone_number: String,
    pub assigned_inspector: UserId,
    pub branch_name: String,
}

/// A submitted inspection as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionRecord {
    /// Record ID.
    pub id: InspectionId,
    /// Inspector login name.
    #[serde(default)]
    pub inspector_name: Option<String>,
    /// Inspector ID.
    #[serde(default)]
    pub inspector_id: Option<UserId>,
    /// Branch the inspection was filed under.
    #[serde(default)]
    pub branch_name: Option<String>,
    /// Creation time.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last change.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Recorded location trail.
    #[serde(flatten)]
    pub trail: TrailPayload,
    /// Form sections and status.
    #[serde(flatten)]
    pub form: InspectionForm,
}

impl InspectionRecord {
    /// Reads a record from backend JSON.
    ///
    /// The backend stores blank form fields as `null`. Top-level nulls are
    /// dropped first so every section falls back to its defaults.
    pub fn from_json(mut value: serde_json::Value) -> Result<Self, serde_json::Error> {
        strip_nulls(&mut value);
        serde_json::from_value(value)
    }

    /// Reads a list of records, e.g. a page of results.
    pub fn from_json_list(values: Vec<serde_json::Value>) -> Result<Vec<Self>, serde_json::Error> {
        values.into_iter().map(Self::from_json).collect()
    }
}

fn strip_nulls(value: &mut serde_json::Value) {
    if let serde_json::Value::Object(map) = value {
        map.retain(|_, v| !v.is_null());
    }
}
