//! Assigned ("new") inspection endpoints.

use reqwest::Method;
use tracing::info;

use inspecta_core::inspection::{NewInspection, NewInspectionRequest};
use inspecta_shared::Role;
use inspecta_shared::types::{AssignmentId, UserId};

use crate::models::AssignInspectorRequest;
use crate::{ApiClient, ClientResult};

impl ApiClient {
    /// POST /new-inspections/create/ - Assigns a visit to an inspector.
    /// Admins and branch admins only.
    pub async fn create_new_inspection(
        &self,
        request: &NewInspectionRequest,
    ) -> ClientResult<NewInspection> {
        self.require_role(Role::can_assign_inspections, "create inspections")?;
        let assignment: NewInspection = self
            .send(
                self.request(Method::POST, "/new-inspections/create/")
                    .json(request),
            )
            .await?;
        info!(
            assignment_id = %assignment.id,
            inspector_id = %assignment.assigned_inspector,
            "Inspection assigned"
        );
        Ok(assignment)
    }

    /// PUT /new-inspections/{id}/ - Edits an assignment's visit details.
    /// Admins and branch admins only.
    pub async fn update_new_inspection(
        &self,
        id: AssignmentId,
        request: &NewInspectionRequest,
    ) -> ClientResult<NewInspection> {
        self.require_role(Role::can_assign_inspections, "update inspections")?;
        let assignment: NewInspection = self
            .send(
                self.request(Method::PUT, &format!("/new-inspections/{id}/"))
                    .json(request),
            )
            .await?;
        info!(assignment_id = %id, "Assignment updated");
        Ok(assignment)
    }

    /// GET /new-inspections/list/ - Assignments visible to the signed-in user.
    pub async fn list_new_inspections(&self) -> ClientResult<Vec<NewInspection>> {
        self.require_signed_in()?;
        self.send(self.request(Method::GET, "/new-inspections/list/"))
            .await
    }

    /// GET /inspections/assigned/ - Visits assigned to the signed-in inspector.
    pub async fn assigned_inspections(&self) -> ClientResult<Vec<NewInspection>> {
        self.require_signed_in()?;
        self.send(self.request(Method::GET, "/inspections/assigned/"))
            .await
    }

    /// POST /new-inspections/{id}/assign/ - Hands an assignment to another
    /// inspector. Admins and branch admins only.
    pub async fn assign_inspector(
        &self,
        id: AssignmentId,
        inspector_id: UserId,
    ) -> ClientResult<NewInspection> {
        self.require_role(Role::can_assign_inspections, "assign inspectors")?;
        let request = self
            .request(Method::POST, &format!("/new-inspections/{id}/assign/"))
            .json(&AssignInspectorRequest { inspector_id });
        let assignment: NewInspection = self.send(request).await?;
        info!(assignment_id = %id, inspector_id = %inspector_id, "Inspector reassigned");
        Ok(assignment)
    }
}
