use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub counts: DashboardCounts,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardCounts {
    pub users: u64,
    pub active_users: u64,
    pub tools: u64,
    pub available_tools: u64,
    pub checked_out_tools: u64,
    pub chemicals: u64,
    pub low_stock_chemicals: u64,
    pub expired_chemicals: u64,
    pub kits: u64,
}
