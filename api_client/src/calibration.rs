use crate::client::SupplyLineClient;
use crate::error::ApiError;
use shared::supplyline::calibration::CalibrationRecord;
use shared::supplyline::tool::Tool;

impl SupplyLineClient {
    pub async fn list_calibrations(&self) -> Result<Vec<CalibrationRecord>, ApiError> {
        self.get_json("api/calibrations").await
    }

    /// Tools whose next calibration falls within `days`.
    pub async fn calibrations_due(&self, days: u32) -> Result<Vec<Tool>, ApiError> {
        self.get_json_query("api/calibrations/due", &[("days", days)])
            .await
    }

    pub async fn calibrations_overdue(&self) -> Result<Vec<Tool>, ApiError> {
        self.get_json("api/calibrations/overdue").await
    }
}
