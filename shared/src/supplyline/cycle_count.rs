use crate::supplyline::dates::optional_date;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleCountSchedule {
    pub id: i64,
    pub name: String,
    pub frequency: Frequency,
    pub method: CountMethod,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Annual,
}

impl Display for Frequency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Frequency::Daily => write!(f, "daily"),
            Frequency::Weekly => write!(f, "weekly"),
            Frequency::Monthly => write!(f, "monthly"),
            Frequency::Quarterly => write!(f, "quarterly"),
            Frequency::Annual => write!(f, "annual"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountMethod {
    Abc,
    Random,
    Location,
    Category,
}

impl Display for CountMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CountMethod::Abc => write!(f, "abc"),
            CountMethod::Random => write!(f, "random"),
            CountMethod::Location => write!(f, "location"),
            CountMethod::Category => write!(f, "category"),
        }
    }
}

/// One scheduled, partial physical audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleCountBatch {
    pub id: i64,
    #[serde(default)]
    pub schedule_id: Option<i64>,
    pub name: String,
    pub status: BatchStatus,
    #[serde(default, deserialize_with = "optional_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "optional_date")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub item_count: u32,
    #[serde(default)]
    pub completed_count: u32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl CycleCountBatch {
    /// Fraction of items counted, in `0.0..=1.0`. Empty batches report 0.
    pub fn progress(&self) -> f64 {
        if self.item_count == 0 {
            0.0
        } else {
            f64::from(self.completed_count.min(self.item_count)) / f64::from(self.item_count)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl BatchStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            BatchStatus::Pending => "pending",
            BatchStatus::InProgress => "in_progress",
            BatchStatus::Completed => "completed",
            BatchStatus::Cancelled => "cancelled",
        }
    }
}

impl Display for BatchStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BatchStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            BatchStatus::Pending,
            BatchStatus::InProgress,
            BatchStatus::Completed,
            BatchStatus::Cancelled,
        ]
        .into_iter()
        .find(|status| status.as_str() == s.trim())
        .ok_or_else(|| format!("unknown batch status {s:?}"))
    }
}
