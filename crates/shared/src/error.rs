//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Errors surfaced to the operator of an inspection session.
#[derive(Debug, Error)]
pub enum AppError {
    /// No session, a rejected token, or a session without a branch.
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// The signed-in role may not perform the action.
    #[error("Access denied: {0}")]
    Forbidden(String),

    /// The backend has no such record.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Form input or a request body was rejected.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The inspection backend failed or was unreachable.
    #[error("Backend error: {0}")]
    Backend(String),

    /// Location tracking could not run on this device.
    #[error("Location error: {0}")]
    Tracking(String),

    /// Anything else.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code this error corresponds to.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Unauthorized(_) => 401,
            Self::Forbidden(_) => 403,
            Self::NotFound(_) => 404,
            Self::Validation(_) => 400,
            Self::Backend(_) => 502,
            Self::Tracking(_) => 503,
            Self::Configuration(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns a stable machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Backend(_) => "BACKEND_ERROR",
            Self::Tracking(_) => "TRACKING_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// The bare message shown in an alert, without the category prefix.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Unauthorized(m)
            | Self::Forbidden(m)
            | Self::NotFound(m)
            | Self::Validation(m)
            | Self::Configuration(m)
            | Self::Backend(m)
            | Self::Tracking(m)
            | Self::Internal(m) => m,
        }
    }

    /// Whether signing in again may resolve the error.
    #[must_use]
    pub const fn needs_sign_in(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}
