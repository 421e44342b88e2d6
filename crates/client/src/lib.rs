//! Typed REST client for the inspection backend.
//!
//! This crate provides:
//! - Authentication (login, logout, current user, password reset)
//! - Inspection records (list, fetch, create, update, status changes)
//! - Assigned inspections
//! - User management
//! - Dashboard statistics
//!
//! Every call reads the bearer token from the shared [`AuthContext`].

mod assignments;
mod auth;
pub mod error;
mod inspections;
pub mod models;
mod stats;
mod users;

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use inspecta_shared::{AuthContext, BackendConfig, Role};

pub use error::{ClientError, ClientResult};

/// Client for the inspection backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    auth: Arc<AuthContext>,
}

impl ApiClient {
    /// Creates a client for the configured backend.
    pub fn new(config: &BackendConfig, auth: Arc<AuthContext>) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth,
        })
    }

    /// The shared authentication context.
    pub fn auth(&self) -> &Arc<AuthContext> {
        &self.auth
    }

    /// Backend base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{path}", self.base_url);
        debug!(method = %method, url = %url, "API request");
        let builder = self.http.request(method, url);
        match self.auth.access_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Sends the request and returns the raw JSON body.
    async fn send_value(&self, builder: RequestBuilder) -> ClientResult<serde_json::Value> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "API response");

        if !status.is_success() {
            return Err(ClientError::from_response(status.as_u16(), &body));
        }
        if body.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ClientResult<T> {
        let value = self.send_value(builder).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Fails without a request when there is no session or its access token
    /// has expired.
    fn require_signed_in(&self) -> ClientResult<()> {
        if !self.auth.is_signed_in() {
            return Err(ClientError::Unauthorized("Not signed in".to_string()));
        }
        if self.auth.is_expired_at(Utc::now()) {
            warn!("Access token expired, sign in again");
            return Err(ClientError::Unauthorized("Session expired".to_string()));
        }
        Ok(())
    }

    fn require_role(&self, allowed: fn(Role) -> bool, action: &'static str) -> ClientResult<Role> {
        self.require_signed_in()?;
        let role = self
            .auth
            .role()
            .ok_or_else(|| ClientError::Unauthorized("Not signed in".to_string()))?;
        if allowed(role) {
            Ok(role)
        } else {
            Err(ClientError::Forbidden(action))
        }
    }
}
