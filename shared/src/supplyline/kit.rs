use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A mobile warehouse tied to an aircraft type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kit {
    pub id: i64,
    pub name: String,
    pub aircraft_type_id: i64,
    #[serde(default)]
    pub aircraft_type_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub status: KitStatus,
    #[serde(default)]
    pub box_count: u32,
    #[serde(default)]
    pub item_count: u32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KitStatus {
    Active,
    Inactive,
    Maintenance,
}

impl KitStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            KitStatus::Active => "active",
            KitStatus::Inactive => "inactive",
            KitStatus::Maintenance => "maintenance",
        }
    }
}

impl Display for KitStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KitStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [KitStatus::Active, KitStatus::Inactive, KitStatus::Maintenance]
            .into_iter()
            .find(|status| status.as_str() == s.trim())
            .ok_or_else(|| format!("unknown kit status {s:?}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KitBox {
    pub id: i64,
    pub kit_id: i64,
    pub box_number: String,
    pub box_type: BoxType,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoxType {
    Expendable,
    Tooling,
    Consumable,
    Loose,
    Floor,
}

impl Display for BoxType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BoxType::Expendable => write!(f, "expendable"),
            BoxType::Tooling => write!(f, "tooling"),
            BoxType::Consumable => write!(f, "consumable"),
            BoxType::Loose => write!(f, "loose"),
            BoxType::Floor => write!(f, "floor"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KitItem {
    pub id: i64,
    pub kit_id: i64,
    pub box_id: i64,
    pub item_type: ItemType,
    pub part_number: String,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub lot_number: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub quantity: f64,
    pub status: KitItemStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    Tool,
    Chemical,
    Expendable,
}

impl ItemType {
    pub const fn as_str(self) -> &'static str {
        match self {
            ItemType::Tool => "tool",
            ItemType::Chemical => "chemical",
            ItemType::Expendable => "expendable",
        }
    }
}

impl Display for ItemType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [ItemType::Tool, ItemType::Chemical, ItemType::Expendable]
            .into_iter()
            .find(|item_type| item_type.as_str() == s.trim())
            .ok_or_else(|| format!("unknown item type {s:?}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KitItemStatus {
    Available,
    Issued,
    Transferred,
}

impl Display for KitItemStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            KitItemStatus::Available => write!(f, "available"),
            KitItemStatus::Issued => write!(f, "issued"),
            KitItemStatus::Transferred => write!(f, "transferred"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    Kit,
    Warehouse,
}

impl Display for LocationType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationType::Kit => write!(f, "kit"),
            LocationType::Warehouse => write!(f, "warehouse"),
        }
    }
}

/// A kit or warehouse, addressed by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub kind: LocationType,
    pub id: i64,
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

impl FromStr for Location {
    type Err = String;

    /// Parses `kit:12` or `warehouse:3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, id) = s
            .split_once(':')
            .ok_or_else(|| format!("expected <kit|warehouse>:<id>, found {s:?}"))?;
        let kind = match kind.trim() {
            "kit" => LocationType::Kit,
            "warehouse" => LocationType::Warehouse,
            other => return Err(format!("unknown location type {other:?}")),
        };
        let id = id
            .trim()
            .parse::<i64>()
            .map_err(|e| format!("invalid location id {id:?}: {e}"))?;
        Ok(Self { kind, id })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferRequest {
    pub item_type: ItemType,
    pub item_id: i64,
    pub from_location_type: LocationType,
    pub from_location_id: i64,
    pub to_location_type: LocationType,
    pub to_location_id: i64,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TransferRequest {
    pub fn new(
        item_type: ItemType,
        item_id: i64,
        from: Location,
        to: Location,
        quantity: u32,
        notes: Option<String>,
    ) -> Self {
        Self {
            item_type,
            item_id,
            from_location_type: from.kind,
            from_location_id: from.id,
            to_location_type: to.kind,
            to_location_id: to.id,
            quantity,
            notes,
        }
    }
}
