use crate::list::{
    AllowList, ListFilter, ListItem, ListState, SearchTerm, SortConfig, SortKey, SortValue,
    matches_exact, parse_key,
};
use shared::supplyline::chemical::{Chemical, ChemicalStatus};
use shared::supplyline::warehouse::Warehouse;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub const DEFAULT_STATUS_FILTER: &str = "available,low_stock";

pub type ChemicalListState = ListState<ChemicalFilter, ChemicalSortKey>;

impl ListItem for Chemical {
    fn id(&self) -> i64 {
        self.id
    }

    fn matches_search(&self, term: &SearchTerm) -> bool {
        term.matches_any([
            Some(self.part_number.as_str()),
            Some(self.lot_number.as_str()),
            self.description.as_deref(),
            self.manufacturer.as_deref(),
        ])
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WarehouseFilter {
    #[default]
    Any,
    Warehouse(i64),
    /// Not in any warehouse, but assigned to a kit.
    InKit,
}

impl FromStr for WarehouseFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "all" => Ok(WarehouseFilter::Any),
            "in_kit" => Ok(WarehouseFilter::InKit),
            id => id
                .parse::<i64>()
                .map(WarehouseFilter::Warehouse)
                .map_err(|_| format!("expected a warehouse id, `in_kit` or `all`, found {s:?}")),
        }
    }
}

impl Display for WarehouseFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            WarehouseFilter::Any => write!(f, "all"),
            WarehouseFilter::Warehouse(id) => write!(f, "{id}"),
            WarehouseFilter::InKit => write!(f, "in_kit"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChemicalFilter {
    pub category: Option<String>,
    pub statuses: AllowList<ChemicalStatus>,
    pub warehouse: WarehouseFilter,
}

impl Default for ChemicalFilter {
    fn default() -> Self {
        Self {
            category: None,
            statuses: AllowList::only(vec![ChemicalStatus::Available, ChemicalStatus::LowStock]),
            warehouse: WarehouseFilter::Any,
        }
    }
}

impl ListFilter<Chemical> for ChemicalFilter {
    fn matches(&self, item: &Chemical) -> bool {
        let in_warehouse = match self.warehouse {
            WarehouseFilter::Any => true,
            WarehouseFilter::Warehouse(id) => item.warehouse_id == Some(id),
            WarehouseFilter::InKit => item.is_in_kit(),
        };
        in_warehouse
            && self.statuses.allows(&item.status)
            && matches_exact(self.category.as_deref(), item.category.as_deref())
    }
}

/// Warehouse id → name, built once per recompute.
#[derive(Debug, Clone, Default)]
pub struct WarehouseDirectory {
    names: HashMap<i64, String>,
}

impl WarehouseDirectory {
    pub fn new(warehouses: &[Warehouse]) -> Self {
        Self {
            names: warehouses
                .iter()
                .map(|w| (w.id, w.name.clone()))
                .collect(),
        }
    }

    pub fn name(&self, id: i64) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    /// Display name of where a chemical lives: its warehouse, else its kit.
    pub fn location_name<'a>(&'a self, chemical: &'a Chemical) -> Option<&'a str> {
        chemical
            .warehouse_id
            .and_then(|id| self.name(id))
            .or(chemical.kit_name.as_deref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChemicalSortKey {
    PartNumber,
    LotNumber,
    Description,
    Manufacturer,
    Category,
    Quantity,
    Status,
    Location,
    WarehouseName,
    ExpirationDate,
}

const SORT_KEYS: [(&str, ChemicalSortKey); 10] = [
    ("part_number", ChemicalSortKey::PartNumber),
    ("lot_number", ChemicalSortKey::LotNumber),
    ("description", ChemicalSortKey::Description),
    ("manufacturer", ChemicalSortKey::Manufacturer),
    ("category", ChemicalSortKey::Category),
    ("quantity", ChemicalSortKey::Quantity),
    ("status", ChemicalSortKey::Status),
    ("location", ChemicalSortKey::Location),
    ("warehouse_name", ChemicalSortKey::WarehouseName),
    ("expiration_date", ChemicalSortKey::ExpirationDate),
];

impl FromStr for ChemicalSortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key(s, &SORT_KEYS)
    }
}

impl SortKey<Chemical> for ChemicalSortKey {
    type Context = WarehouseDirectory;

    fn sort_value(self, item: &Chemical, ctx: &WarehouseDirectory) -> SortValue {
        match self {
            ChemicalSortKey::PartNumber => SortValue::text(Some(item.part_number.as_str())),
            ChemicalSortKey::LotNumber => SortValue::text(Some(item.lot_number.as_str())),
            ChemicalSortKey::Description => SortValue::text(item.description.as_deref()),
            ChemicalSortKey::Manufacturer => SortValue::text(item.manufacturer.as_deref()),
            ChemicalSortKey::Category => SortValue::text(item.category.as_deref()),
            ChemicalSortKey::Quantity => SortValue::Number(item.quantity),
            ChemicalSortKey::Status => SortValue::text(Some(item.status.as_str())),
            ChemicalSortKey::Location => SortValue::text(item.location.as_deref()),
            ChemicalSortKey::WarehouseName => SortValue::text(ctx.location_name(item)),
            ChemicalSortKey::ExpirationDate => SortValue::Date(item.expiration_date),
        }
    }
}

pub fn chemical_list_state(page_size: usize) -> ChemicalListState {
    ListState::new(
        ChemicalFilter::default(),
        SortConfig::ascending(ChemicalSortKey::PartNumber),
        page_size,
    )
}
