//! Location error types.

use std::time::Duration;

use thiserror::Error;

/// Errors that prevent a trail from starting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackingError {
    /// The host has no geolocation capability.
    #[error("geolocation is not supported on this device")]
    Unsupported,
}

/// Per-sample failures reported by the host.
///
/// None of these end the trail: the next tick simply tries again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    /// The operator or the platform refused location access.
    #[error("location permission denied: {0}")]
    PermissionDenied(String),

    /// No fix could be obtained.
    #[error("position unavailable: {0}")]
    PositionUnavailable(String),

    /// No fix arrived within the request timeout.
    #[error("timed out after {0:?} waiting for a position")]
    Timeout(Duration),
}

impl PositionError {
    /// Returns a stable machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::PermissionDenied(_) => "PERMISSION_DENIED",
            Self::PositionUnavailable(_) => "POSITION_UNAVAILABLE",
            Self::Timeout(_) => "TIMEOUT",
        }
    }
}
