use crate::client::SupplyLineClient;
use crate::error::ApiError;
use shared::supplyline::warehouse::{Warehouse, WarehouseList};

impl SupplyLineClient {
    pub async fn list_warehouses(&self) -> Result<Vec<Warehouse>, ApiError> {
        self.get_json::<WarehouseList>("api/warehouses")
            .await
            .map(|list| list.warehouses)
    }
}
