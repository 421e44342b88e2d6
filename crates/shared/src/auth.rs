//! Authentication types and the injected session context.
//!
//! The backend issues a JWT pair on login. The pair and the signed-in user
//! live in an [`AuthContext`] that callers share by reference: login
//! populates it, logout clears it, and everything else only reads it.

use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::jwt::AccessClaims;
use crate::types::UserId;

/// Roles known to the inspection backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Head-office administrator.
    Admin,
    /// Administrator of one branch.
    BranchAdmin,
    /// Field inspector.
    Inspector,
}

impl Role {
    /// Returns true if the role may create and assign new inspections.
    #[must_use]
    pub const fn can_assign_inspections(self) -> bool {
        matches!(self, Self::Admin | Self::BranchAdmin)
    }

    /// Returns true if the role may create or delete user accounts.
    #[must_use]
    pub const fn can_manage_users(self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Returns the wire name of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::BranchAdmin => "branch_admin",
            Self::Inspector => "inspector",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "admin" => Ok(Self::Admin),
            "branch_admin" => Ok(Self::BranchAdmin),
            "inspector" => Ok(Self::Inspector),
            _ => Err(format!("Unknown role: {s}")),
        }
    }
}

/// Login request payload.
///
/// The backend accepts exactly this shape; the role must match the account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// User email.
    pub email: String,
    /// User password.
    pub password: String,
    /// Role the user signs in as.
    pub role: Role,
}

/// Login response payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Access token (short-lived).
    pub access: String,
    /// Refresh token (long-lived).
    pub refresh: String,
    /// Authenticated user.
    pub user: SessionUser,
}

/// The signed-in user as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// User ID.
    pub id: UserId,
    /// Display name.
    pub user_name: String,
    /// User email.
    pub email: String,
    /// User role.
    pub role: Role,
    /// Branch the user belongs to (admins have none).
    #[serde(default)]
    pub branch_name: Option<String>,
}

/// An authenticated session.
#[derive(Debug, Clone)]
pub struct Session {
    /// Access token sent as bearer credentials.
    pub access_token: String,
    /// Refresh token, needed to log out server-side.
    pub refresh_token: String,
    /// Authenticated user.
    pub user: SessionUser,
}

impl From<LoginResponse> for Session {
    fn from(response: LoginResponse) -> Self {
        Self {
            access_token: response.access,
            refresh_token: response.refresh,
            user: response.user,
        }
    }
}

/// Logout request payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutRequest {
    /// The refresh token to blacklist.
    pub refresh: String,
}

/// Password reset request payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordResetRequest {
    /// Account email.
    pub email: String,
}

/// Password reset confirmation payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordResetConfirmRequest {
    /// Token received by email.
    pub token: String,
    /// The new password.
    pub new_password: String,
}

/// Shared authentication context.
///
/// Cheap to read from many places; wrap it in an `Arc` and hand the same
/// instance to every consumer.
#[derive(Debug, Default)]
pub struct AuthContext {
    session: RwLock<Option<Session>>,
}

impl AuthContext {
    /// Creates an empty (signed-out) context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a freshly established session, replacing any previous one.
    pub fn sign_in(&self, session: Session) {
        *self.session.write().unwrap_or_else(PoisonError::into_inner) = Some(session);
    }

    /// Clears the session and returns it.
    pub fn sign_out(&self) -> Option<Session> {
        self.session
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    /// Returns a copy of the current session.
    #[must_use]
    pub fn session(&self) -> Option<Session> {
        self.read(Clone::clone)
    }

    /// Returns true if a session is present.
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.read(|_| ()).is_some()
    }

    /// Returns the bearer token for API calls.
    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.read(|s| s.access_token.clone())
    }

    /// Returns the refresh token.
    #[must_use]
    pub fn refresh_token(&self) -> Option<String> {
        self.read(|s| s.refresh_token.clone())
    }

    /// Returns the signed-in user.
    #[must_use]
    pub fn current_user(&self) -> Option<SessionUser> {
        self.read(|s| s.user.clone())
    }

    /// Returns the signed-in user's role.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.read(|s| s.user.role)
    }

    /// Returns the signed-in user's branch, if any.
    #[must_use]
    pub fn branch_name(&self) -> Option<String> {
        self.read(|s| s.user.branch_name.clone())
            .flatten()
            .filter(|b| !b.trim().is_empty())
    }

    /// Returns true if there is no session or its access token has expired
    /// (or cannot be read) at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.read(|s| AccessClaims::read(&s.access_token))
            .is_none_or(|claims| claims.map_or(true, |c| c.is_expired_at(now)))
    }

    fn read<T>(&self, f: impl FnOnce(&Session) -> T) -> Option<T> {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn inspector_session() -> Session {
        Session {
            access_token: "access-token".into(),
            refresh_token: "refresh-token".into(),
            user: SessionUser {
                id: UserId::new(7),
                user_name: "rahim".into(),
                email: "rahim@example.org".into(),
                role: Role::Inspector,
                branch_name: Some("Motijheel".into()),
            },
        }
    }

    #[test]
    fn test_role_wire_names() {
        assert_eq!(serde_json::to_string(&Role::BranchAdmin).unwrap(), "\"branch_admin\"");
        assert_eq!(Role::from_str("branch-admin").unwrap(), Role::BranchAdmin);
        assert_eq!(Role::from_str("ADMIN").unwrap(), Role::Admin);
        assert!(Role::from_str("auditor").is_err());
    }

    #[test]
    fn test_role_permissions() {
        assert!(Role::Admin.can_assign_inspections());
        assert!(Role::BranchAdmin.can_assign_inspections());
        assert!(!Role::Inspector.can_assign_inspections());
        assert!(Role::Admin.can_manage_users());
        assert!(!Role::BranchAdmin.can_manage_users());
    }

    #[test]
    fn test_sign_in_and_out_lifecycle() {
        let auth = AuthContext::new();
        assert!(!auth.is_signed_in());
        assert_eq!(auth.access_token(), None);

        auth.sign_in(inspector_session());
        assert!(auth.is_signed_in());
        assert_eq!(auth.access_token().as_deref(), Some("access-token"));
        assert_eq!(auth.branch_name().as_deref(), Some("Motijheel"));
        assert_eq!(auth.role(), Some(Role::Inspector));

        let previous = auth.sign_out().unwrap();
        assert_eq!(previous.refresh_token, "refresh-token");
        assert!(!auth.is_signed_in());
        assert_eq!(auth.branch_name(), None);
    }

    #[test]
    fn test_blank_branch_is_none() {
        let auth = AuthContext::new();
        let mut session = inspector_session();
        session.user.branch_name = Some("  ".into());
        auth.sign_in(session);
        assert_eq!(auth.branch_name(), None);
    }

    #[test]
    fn test_unreadable_token_counts_as_expired() {
        let auth = AuthContext::new();
        assert!(auth.is_expired_at(Utc::now()));
        auth.sign_in(inspector_session());
        assert!(auth.is_expired_at(Utc::now()));
    }

    #[test]
    fn test_login_response_into_session() {
        let json = r#"{
            "access": "a", "refresh": "r",
            "user": {"id": 3, "user_name": "nadia", "email": "n@example.org",
                     "role": "branch_admin", "branch_name": "Gulshan"}
        }"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        let session = Session::from(response);
        assert_eq!(session.user.id, UserId::new(3));
        assert_eq!(session.user.role, Role::BranchAdmin);
        assert_eq!(session.access_token, "a");
    }
}
