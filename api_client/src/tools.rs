use crate::client::SupplyLineClient;
use crate::error::ApiError;
use shared::supplyline::Acknowledgement;
use shared::supplyline::tool::{CheckoutRequest, ReturnRequest, Tool};

impl SupplyLineClient {
    pub async fn list_tools(&self) -> Result<Vec<Tool>, ApiError> {
        self.get_json("api/tools").await
    }

    pub async fn get_tool(&self, id: i64) -> Result<Tool, ApiError> {
        self.get_json(&format!("api/tools/{id}")).await
    }

    pub async fn checkout_tool(
        &self,
        id: i64,
        request: &CheckoutRequest,
    ) -> Result<Acknowledgement, ApiError> {
        self.post_json(&format!("api/tools/{id}/checkout"), request)
            .await
    }

    pub async fn return_tool(
        &self,
        id: i64,
        request: &ReturnRequest,
    ) -> Result<Acknowledgement, ApiError> {
        self.post_json(&format!("api/tools/{id}/return"), request)
            .await
    }
}
