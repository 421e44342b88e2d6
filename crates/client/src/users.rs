//! User management endpoints.

use reqwest::Method;
use tracing::info;

use inspecta_shared::Role;
use inspecta_shared::types::UserId;

use crate::models::{CreateUserRequest, UpdateUserRequest, UserRecord};
use crate::{ApiClient, ClientError, ClientResult};

impl ApiClient {
    /// Creates a branch admin (POST /branch-admin/create/) or an inspector
    /// (POST /inspector/create/). Admins only.
    pub async fn create_user(&self, request: &CreateUserRequest) -> ClientResult<UserRecord> {
        self.require_role(Role::can_manage_users, "create users")?;
        let path = match request.role {
            Role::BranchAdmin => "/branch-admin/create/",
            Role::Inspector => "/inspector/create/",
            Role::Admin => return Err(ClientError::Forbidden("create admin accounts")),
        };

        let user: UserRecord = self
            .send(self.request(Method::POST, path).json(request))
            .await?;
        info!(user_id = %user.id, role = %user.role, "User created");
        Ok(user)
    }

    /// GET /users/ - All users, optionally only those with `role`.
    pub async fn list_users(&self, role: Option<Role>) -> ClientResult<Vec<UserRecord>> {
        self.require_signed_in()?;
        let mut request = self.request(Method::GET, "/users/");
        if let Some(role) = role {
            request = request.query(&[("role", role.as_str())]);
        }
        self.send(request).await
    }

    /// GET /inspector/list/
    pub async fn list_inspectors(&self) -> ClientResult<Vec<UserRecord>> {
        self.require_signed_in()?;
        self.send(self.request(Method::GET, "/inspector/list/"))
            .await
    }

    /// GET /branch-admin/list/
    pub async fn list_branch_admins(&self) -> ClientResult<Vec<UserRecord>> {
        self.require_signed_in()?;
        self.send(self.request(Method::GET, "/branch-admin/list/"))
            .await
    }

    /// PUT /user/update/{id}/ - Changes only the fields that are set.
    /// Admins only.
    pub async fn update_user(
        &self,
        id: UserId,
        changes: &UpdateUserRequest,
    ) -> ClientResult<UserRecord> {
        self.require_role(Role::can_manage_users, "update users")?;
        let user: UserRecord = self
            .send(
                self.request(Method::PUT, &format!("/user/update/{id}/"))
                    .json(changes),
            )
            .await?;
        info!(user_id = %id, "User updated");
        Ok(user)
    }

    /// DELETE /user/delete/{id}/ - Admins only.
    pub async fn delete_user(&self, id: UserId) -> ClientResult<()> {
        self.require_role(Role::can_manage_users, "delete users")?;
        self.send_value(self.request(Method::DELETE, &format!("/user/delete/{id}/")))
            .await?;
        info!(user_id = %id, "User deleted");
        Ok(())
    }
}
