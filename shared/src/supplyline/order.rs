use crate::supplyline::dates::optional_date;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Ordered,
    Fulfilled,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Ordered => write!(f, "ordered"),
            OrderStatus::Fulfilled => write!(f, "fulfilled"),
        }
    }
}

/// A user's request for replenishment. Not a purchase order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReorderRequestRecord {
    pub id: i64,
    #[serde(default)]
    pub chemical_id: Option<i64>,
    pub part_number: String,
    #[serde(default)]
    pub requested_quantity: Option<u32>,
    #[serde(default, deserialize_with = "optional_date")]
    pub expected_delivery_date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
    pub status: OrderStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReorderRequest {
    pub requested_quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkOrderedRequest {
    pub expected_delivery_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
