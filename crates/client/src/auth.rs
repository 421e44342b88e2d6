//! Authentication endpoints.

use reqwest::Method;
use serde::Deserialize;
use tracing::{info, warn};

use inspecta_shared::auth::{LogoutRequest, PasswordResetConfirmRequest, PasswordResetRequest};
use inspecta_shared::{LoginRequest, LoginResponse, Role, Session, SessionUser};

use crate::models::UserRecord;
use crate::{ApiClient, ClientResult};

#[derive(Deserialize)]
struct DetailResponse {
    #[serde(default)]
    detail: String,
}

impl ApiClient {
    /// POST /token/ - Signs in and stores the session in the auth context.
    pub async fn login(&self, email: &str, password: &str, role: Role) -> ClientResult<SessionUser> {
        let body = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
            role,
        };
        let response: LoginResponse = self
            .send(self.request(Method::POST, "/token/").json(&body))
            .await?;

        let session = Session::from(response);
        let user = session.user.clone();
        self.auth.sign_in(session);

        info!(user_id = %user.id, role = %user.role, branch = ?user.branch_name, "Signed in");
        Ok(user)
    }

    /// POST /token/logout/ - Signs out.
    ///
    /// The server-side logout is best effort: the local session is cleared
    /// even if the request fails.
    pub async fn logout(&self) {
        let Some(session) = self.auth.session() else {
            return;
        };

        let body = LogoutRequest {
            refresh: session.refresh_token,
        };
        let request = self.request(Method::POST, "/token/logout/").json(&body);
        if let Err(err) = self.send_value(request).await {
            warn!(error = %err, "Logout request failed");
        }

        self.auth.sign_out();
        info!(user_id = %session.user.id, "Signed out");
    }

    /// GET /current-user/ - The signed-in user's account.
    pub async fn current_user(&self) -> ClientResult<UserRecord> {
        self.require_signed_in()?;
        self.send(self.request(Method::GET, "/current-user/")).await
    }

    /// POST /password_reset/ - Requests a reset link. Returns the backend's
    /// confirmation message.
    pub async fn password_reset(&self, email: &str) -> ClientResult<String> {
        let body = PasswordResetRequest {
            email: email.trim().to_string(),
        };
        let response: DetailResponse = self
            .send(self.request(Method::POST, "/password_reset/").json(&body))
            .await?;
        Ok(response.detail)
    }

    /// POST /password_reset_confirm/ - Sets a new password with a reset token.
    pub async fn password_reset_confirm(&self, token: &str, new_password: &str) -> ClientResult<String> {
        let body = PasswordResetConfirmRequest {
            token: token.to_string(),
            new_password: new_password.to_string(),
        };
        let response: DetailResponse = self
            .send(self.request(Method::POST, "/password_reset_confirm/").json(&body))
            .await?;
        Ok(response.detail)
    }
}
