use crate::list::{
    ListFilter, ListItem, ListState, SearchTerm, SortConfig, SortKey, SortValue, matches_exact,
    parse_key,
};
use shared::supplyline::cycle_count::{BatchStatus, CycleCountBatch};
use std::str::FromStr;

pub type BatchListState = ListState<BatchFilter, BatchSortKey>;

impl ListItem for CycleCountBatch {
    fn id(&self) -> i64 {
        self.id
    }

    fn matches_search(&self, term: &SearchTerm) -> bool {
        term.matches_any([Some(self.name.as_str())])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchFilter {
    pub status: Option<BatchStatus>,
}

impl ListFilter<CycleCountBatch> for BatchFilter {
    fn matches(&self, item: &CycleCountBatch) -> bool {
        matches_exact(self.status.as_ref(), Some(&item.status))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchSortKey {
    Name,
    Status,
    StartDate,
    Progress,
    CreatedAt,
}

const SORT_KEYS: [(&str, BatchSortKey); 5] = [
    ("name", BatchSortKey::Name),
    ("status", BatchSortKey::Status),
    ("start_date", BatchSortKey::StartDate),
    ("progress", BatchSortKey::Progress),
    ("created_at", BatchSortKey::CreatedAt),
];

impl FromStr for BatchSortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key(s, &SORT_KEYS)
    }
}

impl SortKey<CycleCountBatch> for BatchSortKey {
    type Context = ();

    fn sort_value(self, item: &CycleCountBatch, _ctx: &()) -> SortValue {
        match self {
            BatchSortKey::Name => SortValue::text(Some(item.name.as_str())),
            BatchSortKey::Status => SortValue::text(Some(item.status.as_str())),
            BatchSortKey::StartDate => SortValue::Date(item.start_date),
            BatchSortKey::Progress => SortValue::Number(item.progress()),
            BatchSortKey::CreatedAt => SortValue::Timestamp(item.created_at),
        }
    }
}

pub fn batch_list_state(page_size: usize) -> BatchListState {
    ListState::new(
        BatchFilter::default(),
        SortConfig::ascending(BatchSortKey::StartDate),
        page_size,
    )
}
