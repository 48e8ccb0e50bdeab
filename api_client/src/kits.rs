use crate::client::SupplyLineClient;
use crate::error::ApiError;
use shared::supplyline::Acknowledgement;
use shared::supplyline::kit::{Kit, KitBox, KitItem, TransferRequest};
use tracing::info;

impl SupplyLineClient {
    pub async fn list_kits(&self) -> Result<Vec<Kit>, ApiError> {
        self.get_json("api/kits").await
    }

    pub async fn get_kit(&self, id: i64) -> Result<Kit, ApiError> {
        self.get_json(&format!("api/kits/{id}")).await
    }

    pub async fn kit_boxes(&self, kit_id: i64) -> Result<Vec<KitBox>, ApiError> {
        self.get_json(&format!("api/kits/{kit_id}/boxes")).await
    }

    pub async fn kit_items(&self, kit_id: i64) -> Result<Vec<KitItem>, ApiError> {
        self.get_json(&format!("api/kits/{kit_id}/items")).await
    }

    pub async fn transfer(&self, request: &TransferRequest) -> Result<Acknowledgement, ApiError> {
        let ack = self.post_json("api/transfers", request).await?;
        info!(
            item_type = %request.item_type,
            item_id = request.item_id,
            quantity = request.quantity,
            "transfer recorded"
        );
        Ok(ack)
    }
}
