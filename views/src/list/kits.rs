use crate::list::{
    ListFilter, ListItem, ListState, SearchTerm, SortConfig, SortKey, SortValue, matches_exact,
    parse_key,
};
use shared::supplyline::kit::{Kit, KitStatus};
use std::str::FromStr;

pub type KitListState = ListState<KitFilter, KitSortKey>;

impl ListItem for Kit {
    fn id(&self) -> i64 {
        self.id
    }

    fn matches_search(&self, term: &SearchTerm) -> bool {
        term.matches_any([
            Some(self.name.as_str()),
            self.description.as_deref(),
            self.aircraft_type_name.as_deref(),
        ])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KitFilter {
    pub aircraft_type_id: Option<i64>,
    pub status: Option<KitStatus>,
}

impl ListFilter<Kit> for KitFilter {
    fn matches(&self, item: &Kit) -> bool {
        matches_exact(self.aircraft_type_id.as_ref(), Some(&item.aircraft_type_id))
            && matches_exact(self.status.as_ref(), Some(&item.status))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KitSortKey {
    Name,
    AircraftType,
    Status,
    ItemCount,
    CreatedAt,
}

const SORT_KEYS: [(&str, KitSortKey); 5] = [
    ("name", KitSortKey::Name),
    ("aircraft_type", KitSortKey::AircraftType),
    ("status", KitSortKey::Status),
    ("item_count", KitSortKey::ItemCount),
    ("created_at", KitSortKey::CreatedAt),
];

impl FromStr for KitSortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key(s, &SORT_KEYS)
    }
}

impl SortKey<Kit> for KitSortKey {
    type Context = ();

    fn sort_value(self, item: &Kit, _ctx: &()) -> SortValue {
        match self {
            KitSortKey::Name => SortValue::text(Some(item.name.as_str())),
            KitSortKey::AircraftType => SortValue::text(item.aircraft_type_name.as_deref()),
            KitSortKey::Status => SortValue::text(Some(item.status.as_str())),
            KitSortKey::ItemCount => SortValue::Number(f64::from(item.item_count)),
            KitSortKey::CreatedAt => SortValue::Timestamp(item.created_at),
        }
    }
}

pub fn kit_list_state(page_size: usize) -> KitListState {
    ListState::new(
        KitFilter::default(),
        SortConfig::ascending(KitSortKey::Name),
        page_size,
    )
}
