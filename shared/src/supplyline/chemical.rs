use crate::supplyline::dates::optional_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chemical {
    pub id: i64,
    pub part_number: String,
    pub lot_number: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub quantity: f64,
    pub unit: String,
    pub status: ChemicalStatus,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub warehouse_id: Option<i64>,
    #[serde(default)]
    pub kit_id: Option<i64>,
    #[serde(default)]
    pub kit_name: Option<String>,
    #[serde(default)]
    pub box_number: Option<String>,
    #[serde(default, deserialize_with = "optional_date")]
    pub expiration_date: Option<NaiveDate>,
    #[serde(default)]
    pub reorder_status: ReorderStatus,
    #[serde(default)]
    pub needs_reorder: bool,
    #[serde(default, deserialize_with = "optional_date")]
    pub expected_delivery_date: Option<NaiveDate>,
}

/// Where a chemical currently lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Warehouse(i64),
    Kit(i64),
    Unassigned,
}

impl Chemical {
    pub fn placement(&self) -> Placement {
        match (self.warehouse_id, self.kit_id) {
            (Some(id), _) => Placement::Warehouse(id),
            (None, Some(id)) => Placement::Kit(id),
            (None, None) => Placement::Unassigned,
        }
    }

    pub fn is_in_kit(&self) -> bool {
        matches!(self.placement(), Placement::Kit(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChemicalStatus {
    Available,
    LowStock,
    OutOfStock,
    Expired,
}

impl ChemicalStatus {
    pub const ALL: [ChemicalStatus; 4] = [
        ChemicalStatus::Available,
        ChemicalStatus::LowStock,
        ChemicalStatus::OutOfStock,
        ChemicalStatus::Expired,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ChemicalStatus::Available => "available",
            ChemicalStatus::LowStock => "low_stock",
            ChemicalStatus::OutOfStock => "out_of_stock",
            ChemicalStatus::Expired => "expired",
        }
    }
}

impl Display for ChemicalStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChemicalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s.trim())
            .ok_or_else(|| format!("unknown chemical status {s:?}"))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReorderStatus {
    #[default]
    NotNeeded,
    Needed,
    Requested,
    Ordered,
}

impl Display for ReorderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ReorderStatus::NotNeeded => write!(f, "not_needed"),
            ReorderStatus::Needed => write!(f, "needed"),
            ReorderStatus::Requested => write!(f, "requested"),
            ReorderStatus::Ordered => write!(f, "ordered"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueChemicalRequest {
    pub quantity: u32,
    pub hangar: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MarkDeliveredRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received_quantity: Option<f64>,
}
