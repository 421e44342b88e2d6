//! Reading the claims of backend-issued access tokens.
//!
//! The client never holds the signing key, so signatures are not verified
//! here; the backend does that on every request. Reading `exp` locally lets
//! callers notice an expired session before making a doomed request.

use chrono::{DateTime, Utc};
use jsonwebtoken::dangerous::insecure_decode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while reading a token.
#[derive(Debug, Error)]
pub enum JwtError {
    /// Token decoding failed.
    #[error("failed to decode token: {0}")]
    DecodingError(String),
}

/// Claims carried by the backend's access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Issued at timestamp.
    #[serde(default)]
    pub iat: Option<i64>,
    /// Backend user ID.
    #[serde(default)]
    pub user_id: Option<i64>,
    /// `access` or `refresh`.
    #[serde(default)]
    pub token_type: Option<String>,
}

impl AccessClaims {
    /// Reads the claims of a token without verifying its signature.
    ///
    /// # Errors
    ///
    /// Returns `JwtError::DecodingError` if the token is malformed or has no
    /// `exp` claim.
    pub fn read(token: &str) -> Result<Self, JwtError> {
        insecure_decode::<Self>(token)
            .map(|data| data.claims)
            .map_err(|e| JwtError::DecodingError(e.to_string()))
    }

    /// Returns the expiry as a timestamp.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Returns true if the token is expired at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.exp <= now.timestamp()
    }
}
