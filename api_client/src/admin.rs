use crate::client::SupplyLineClient;
use crate::error::ApiError;
use shared::supplyline::admin::DashboardStats;

impl SupplyLineClient {
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.get_json("api/admin/dashboard/stats").await
    }
}
