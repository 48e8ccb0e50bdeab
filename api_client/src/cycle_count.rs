use crate::client::SupplyLineClient;
use crate::error::ApiError;
use shared::supplyline::cycle_count::{CycleCountBatch, CycleCountSchedule};

impl SupplyLineClient {
    pub async fn cycle_count_schedules(&self) -> Result<Vec<CycleCountSchedule>, ApiError> {
        self.get_json("api/cycle-count/schedules").await
    }

    pub async fn cycle_count_batches(&self) -> Result<Vec<CycleCountBatch>, ApiError> {
        self.get_json("api/cycle-count/batches").await
    }

    pub async fn cycle_count_batch(&self, id: i64) -> Result<CycleCountBatch, ApiError> {
        self.get_json(&format!("api/cycle-count/batches/{id}"))
            .await
    }
}
