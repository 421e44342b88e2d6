//! Dashboard statistics endpoints.

use reqwest::Method;

use crate::models::{InspectionCounts, InspectorStats};
use crate::{ApiClient, ClientError, ClientResult};

impl ApiClient {
    /// GET /inspections/stats/ - Counts for the signed-in inspector.
    pub async fn inspector_stats(&self) -> ClientResult<InspectorStats> {
        self.require_signed_in()?;
        self.send(self.request(Method::GET, "/inspections/stats/"))
            .await
    }

    /// GET /inspection/stats/ - Counts over all inspections.
    pub async fn dashboard_stats(&self) -> ClientResult<InspectionCounts> {
        self.require_signed_in()?;
        self.send(self.request(Method::GET, "/inspection/stats/"))
            .await
    }

    /// GET /branch/inspection-stats/ - Counts for one branch.
    ///
    /// Without `branch_name`, the signed-in user's branch is used.
    pub async fn branch_stats(&self, branch_name: Option<&str>) -> ClientResult<InspectionCounts> {
        let branch = match branch_name.map(str::trim).filter(|b| !b.is_empty()) {
            Some(branch) => branch.to_string(),
            None => self.auth.branch_name().ok_or_else(|| ClientError::Api {
                status: 400,
                message: "Branch name is required".to_string(),
            })?,
        };
        let request = self
            .request(Method::GET, "/branch/inspection-stats/")
            .query(&[("branch_name", branch.as_str())]);
        self.send(request).await
    }
}
