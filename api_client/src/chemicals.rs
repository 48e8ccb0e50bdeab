use crate::client::SupplyLineClient;
use crate::error::ApiError;
use shared::supplyline::Acknowledgement;
use shared::supplyline::chemical::{Chemical, IssueChemicalRequest, MarkDeliveredRequest};
use shared::supplyline::order::{MarkOrderedRequest, ReorderRequest};
use tracing::info;

impl SupplyLineClient {
    pub async fn list_chemicals(&self) -> Result<Vec<Chemical>, ApiError> {
        let chemicals: Vec<Chemical> = self.get_json("api/chemicals").await?;
        info!(count = chemicals.len(), "loaded chemicals");
        Ok(chemicals)
    }

    pub async fn get_chemical(&self, id: i64) -> Result<Chemical, ApiError> {
        self.get_json(&format!("api/chemicals/{id}")).await
    }

    pub async fn chemicals_needing_reorder(&self) -> Result<Vec<Chemical>, ApiError> {
        self.get_json("api/chemicals/reorder-needed").await
    }

    pub async fn chemicals_on_order(&self) -> Result<Vec<Chemical>, ApiError> {
        self.get_json("api/chemicals/on-order").await
    }

    pub async fn issue_chemical(
        &self,
        id: i64,
        request: &IssueChemicalRequest,
    ) -> Result<Acknowledgement, ApiError> {
        self.post_json(&format!("api/chemicals/{id}/issue"), request)
            .await
    }

    pub async fn request_reorder(
        &self,
        id: i64,
        request: &ReorderRequest,
    ) -> Result<Acknowledgement, ApiError> {
        self.post_json(&format!("api/chemicals/{id}/reorder-request"), request)
            .await
    }

    pub async fn mark_chemical_ordered(
        &self,
        id: i64,
        request: &MarkOrderedRequest,
    ) -> Result<Acknowledgement, ApiError> {
        self.post_json(&format!("api/chemicals/{id}/mark-ordered"), request)
            .await
    }

    pub async fn mark_chemical_delivered(
        &self,
        id: i64,
        request: &MarkDeliveredRequest,
    ) -> Result<Acknowledgement, ApiError> {
        self.post_json(&format!("api/chemicals/{id}/mark-delivered"), request)
            .await
    }

    pub async fn delete_chemical(&self, id: i64) -> Result<Acknowledgement, ApiError> {
        self.delete_json(&format!("api/chemicals/{id}")).await
    }
}
