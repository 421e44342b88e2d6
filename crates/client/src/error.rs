//! Client error types.

use inspecta_shared::AppError;
use thiserror::Error;

/// Errors returned by [`crate::ApiClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or the response could not be read.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with an error status.
    #[error("{message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message taken from the error body.
        message: String,
    },

    /// No session, or the backend rejected the credentials.
    #[error("Authentication required: {0}")]
    Unauthorized(String),

    /// The signed-in role may not perform the operation.
    #[error("You don't have permission to {0}")]
    Forbidden(&'static str),

    /// The response body was not the expected JSON.
    #[error("JSON parse error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// Returns the HTTP status code this error corresponds to.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Api { status, .. } => *status,
            Self::Unauthorized(_) => 401,
            Self::Forbidden(_) => 403,
            Self::Http(err) => err.status().map_or(502, |s| s.as_u16()),
            Self::Decode(_) => 502,
        }
    }

    /// Returns a stable machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Http(_) => "HTTP_ERROR",
            Self::Api { .. } => "API_ERROR",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::Decode(_) => "DECODE_ERROR",
        }
    }

    /// Builds the error for a non-success response body.
    ///
    /// The message is the first of `detail`, `error` or `message`, a bare
    /// JSON string body, or `HTTP error! status: N`.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = error_message(body)
            .unwrap_or_else(|| format!("HTTP error! status: {status}"));
        if status == 401 {
            Self::Unauthorized(message)
        } else {
            Self::Api { status, message }
        }
    }
}

fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    if let Some(text) = value.as_str() {
        return Some(text.to_string());
    }
    ["detail", "error", "message"].iter().find_map(|key| {
        value
            .get(key)
            .and_then(serde_json::Value::as_str)
            .filter(|text| !text.is_empty())
            .map(str::to_string)
    })
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Unauthorized(message) => Self::Unauthorized(message),
            ClientError::Forbidden(action) => Self::Forbidden(action.to_string()),
            ClientError::Api {
                status: 404,
                message,
            } => Self::NotFound(message),
            ClientError::Api {
                status: 400,
                message,
            } => Self::Validation(message),
            other => Self::Backend(other.to_string()),
        }
    }
}

/// Result type alias using `ClientError`.
pub type ClientResult<T> = Result<T, ClientError>;
