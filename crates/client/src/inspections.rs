//! Inspection record endpoints.

use reqwest::Method;
use tracing::info;

use inspecta_core::inspection::{InspectionRecord, InspectionStatus, InspectionSubmission};
use inspecta_shared::types::{InspectionId, PageResponse};

use crate::models::{InspectionQuery, StatusUpdate};
use crate::{ApiClient, ClientResult};

impl ApiClient {
    /// GET /inspections/ - The signed-in inspector's inspections.
    pub async fn list_inspections(
        &self,
        query: &InspectionQuery,
    ) -> ClientResult<PageResponse<InspectionRecord>> {
        self.require_signed_in()?;
        let request = self
            .request(Method::GET, "/inspections/")
            .query(&query.query_pairs());
        let page: PageResponse<serde_json::Value> = self.send(request).await?;

        Ok(match page {
            PageResponse::Paged {
                count,
                next,
                previous,
                results,
            } => PageResponse::Paged {
                count,
                next,
                previous,
                results: InspectionRecord::from_json_list(results)?,
            },
            PageResponse::Plain(items) => {
                PageResponse::Plain(InspectionRecord::from_json_list(items)?)
            }
        })
    }

    /// GET /inspections/{id}/
    pub async fn get_inspection(&self, id: InspectionId) -> ClientResult<InspectionRecord> {
        self.require_signed_in()?;
        let value = self
            .send_value(self.request(Method::GET, &format!("/inspections/{id}/")))
            .await?;
        Ok(InspectionRecord::from_json(value)?)
    }

    /// POST /inspections/ - Files a new inspection.
    pub async fn create_inspection(
        &self,
        submission: &InspectionSubmission,
    ) -> ClientResult<InspectionRecord> {
        self.require_signed_in()?;
        let value = self
            .send_value(self.request(Method::POST, "/inspections/").json(submission))
            .await?;
        let record = InspectionRecord::from_json(value)?;
        info!(
            inspection_id = %record.id,
            points = submission.trail.total_location_points,
            "Inspection submitted"
        );
        Ok(record)
    }

    /// PUT /inspections/{id}/ - Replaces a submitted inspection.
    pub async fn update_inspection(
        &self,
        id: InspectionId,
        submission: &InspectionSubmission,
    ) -> ClientResult<InspectionRecord> {
        self.require_signed_in()?;
        let value = self
            .send_value(
                self.request(Method::PUT, &format!("/inspections/{id}/"))
                    .json(submission),
            )
            .await?;
        info!(inspection_id = %id, "Inspection updated");
        Ok(InspectionRecord::from_json(value)?)
    }

    /// PATCH /inspections/{id}/update_status/
    pub async fn update_status(
        &self,
        id: InspectionId,
        status: InspectionStatus,
    ) -> ClientResult<InspectionRecord> {
        self.require_signed_in()?;
        let request = self
            .request(Method::PATCH, &format!("/inspections/{id}/update_status/"))
            .json(&StatusUpdate { status });
        let value = self.send_value(request).await?;
        info!(inspection_id = %id, status = %status, "Inspection status changed");
        Ok(InspectionRecord::from_json(value)?)
    }
}
