use crate::supplyline::dates::optional_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub id: i64,
    pub tool_number: String,
    pub serial_number: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub status: ToolStatus,
    #[serde(default)]
    pub warehouse_id: Option<i64>,
    #[serde(default)]
    pub requires_calibration: bool,
    #[serde(default)]
    pub calibration_frequency_days: Option<u32>,
    #[serde(default, deserialize_with = "optional_date")]
    pub last_calibration_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "optional_date")]
    pub next_calibration_date: Option<NaiveDate>,
    #[serde(default)]
    pub calibration_status: Option<CalibrationStatus>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolStatus {
    Available,
    CheckedOut,
    Maintenance,
    Retired,
}

impl ToolStatus {
    pub const ALL: [ToolStatus; 4] = [
        ToolStatus::Available,
        ToolStatus::CheckedOut,
        ToolStatus::Maintenance,
        ToolStatus::Retired,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ToolStatus::Available => "available",
            ToolStatus::CheckedOut => "checked_out",
            ToolStatus::Maintenance => "maintenance",
            ToolStatus::Retired => "retired",
        }
    }
}

impl Display for ToolStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s.trim())
            .ok_or_else(|| format!("unknown tool status {s:?}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalibrationStatus {
    Current,
    DueSoon,
    Overdue,
    NotApplicable,
}

impl Display for CalibrationStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CalibrationStatus::Current => write!(f, "current"),
            CalibrationStatus::DueSoon => write!(f, "due_soon"),
            CalibrationStatus::Overdue => write!(f, "overdue"),
            CalibrationStatus::NotApplicable => write!(f, "not_applicable"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutRequest {
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_return_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReturnRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}
