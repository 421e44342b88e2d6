//! Inspection error types.

use inspecta_shared::AppError;
use thiserror::Error;

use crate::location::TrackingError;

/// Errors raised while filling in or submitting an inspection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InspectionError {
    /// Nobody is signed in.
    #[error("Not signed in. Please login again.")]
    NotSignedIn,

    /// The session has no branch to file the inspection under.
    #[error("Branch information not found. Please login again.")]
    MissingBranch,

    /// Photo limit reached.
    #[error("Maximum {max} photos allowed")]
    TooManyPhotos {
        /// The limit.
        max: usize,
    },

    /// A working capital row that does not exist.
    #[error("Working capital row {index} out of range ({len} rows)")]
    RowOutOfRange {
        /// Requested row.
        index: usize,
        /// Number of rows.
        len: usize,
    },

    /// Location tracking could not be started.
    #[error(transparent)]
    Tracking(#[from] TrackingError),
}

impl InspectionError {
    /// Returns a stable machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotSignedIn => "NOT_SIGNED_IN",
            Self::MissingBranch => "MISSING_BRANCH",
            Self::TooManyPhotos { .. } => "TOO_MANY_PHOTOS",
            Self::RowOutOfRange { .. } => "ROW_OUT_OF_RANGE",
            Self::Tracking(_) => "TRACKING_UNSUPPORTED",
        }
    }
}

impl From<InspectionError> for AppError {
    fn from(err: InspectionError) -> Self {
        match err {
            InspectionError::NotSignedIn | InspectionError::MissingBranch => {
                Self::Unauthorized(err.to_string())
            }
            InspectionError::TooManyPhotos { .. } | InspectionError::RowOutOfRange { .. } => {
                Self::Validation(err.to_string())
            }
            InspectionError::Tracking(_) => Self::Tracking(err.to_string()),
        }
    }
}
