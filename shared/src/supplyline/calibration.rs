use crate::supplyline::dates::{optional_date, required_date};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalibrationRecord {
    pub id: i64,
    pub tool_id: i64,
    #[serde(default)]
    pub tool_number: Option<String>,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(deserialize_with = "required_date")]
    pub calibration_date: NaiveDate,
    #[serde(default, deserialize_with = "optional_date")]
    pub next_calibration_date: Option<NaiveDate>,
    #[serde(rename = "calibration_status")]
    pub outcome: CalibrationOutcome,
    #[serde(default)]
    pub performed_by: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalibrationOutcome {
    Pass,
    Fail,
    Limited,
}

impl CalibrationOutcome {
    pub const fn as_str(self) -> &'static str {
        match self {
            CalibrationOutcome::Pass => "pass",
            CalibrationOutcome::Fail => "fail",
            CalibrationOutcome::Limited => "limited",
        }
    }
}

impl Display for CalibrationOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalibrationOutcome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            CalibrationOutcome::Pass,
            CalibrationOutcome::Fail,
            CalibrationOutcome::Limited,
        ]
        .into_iter()
        .find(|outcome| outcome.as_str() == s.trim())
        .ok_or_else(|| format!("unknown calibration outcome {s:?}"))
    }
}
