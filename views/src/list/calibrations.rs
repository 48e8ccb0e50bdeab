use crate::list::{
    ListFilter, ListItem, ListState, SearchTerm, SortConfig, SortDirection, SortKey, SortValue,
    matches_exact, parse_key,
};
use shared::supplyline::calibration::{CalibrationOutcome, CalibrationRecord};
use std::str::FromStr;

pub type CalibrationListState = ListState<CalibrationFilter, CalibrationSortKey>;

impl ListItem for CalibrationRecord {
    fn id(&self) -> i64 {
        self.id
    }

    fn matches_search(&self, term: &SearchTerm) -> bool {
        term.matches_any([
            self.tool_number.as_deref(),
            self.serial_number.as_deref(),
            self.performed_by.as_deref(),
        ])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalibrationFilter {
    pub outcome: Option<CalibrationOutcome>,
    pub tool_id: Option<i64>,
}

impl ListFilter<CalibrationRecord> for CalibrationFilter {
    fn matches(&self, item: &CalibrationRecord) -> bool {
        matches_exact(self.outcome.as_ref(), Some(&item.outcome))
            && matches_exact(self.tool_id.as_ref(), Some(&item.tool_id))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalibrationSortKey {
    CalibrationDate,
    NextCalibrationDate,
    ToolNumber,
    Outcome,
    PerformedBy,
}

const SORT_KEYS: [(&str, CalibrationSortKey); 5] = [
    ("calibration_date", CalibrationSortKey::CalibrationDate),
    ("next_calibration_date", CalibrationSortKey::NextCalibrationDate),
    ("tool_number", CalibrationSortKey::ToolNumber),
    ("outcome", CalibrationSortKey::Outcome),
    ("performed_by", CalibrationSortKey::PerformedBy),
];

impl FromStr for CalibrationSortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key(s, &SORT_KEYS)
    }
}

impl SortKey<CalibrationRecord> for CalibrationSortKey {
    type Context = ();

    fn sort_value(self, item: &CalibrationRecord, _ctx: &()) -> SortValue {
        match self {
            CalibrationSortKey::CalibrationDate => SortValue::Date(Some(item.calibration_date)),
            CalibrationSortKey::NextCalibrationDate => SortValue::Date(item.next_calibration_date),
            CalibrationSortKey::ToolNumber => SortValue::text(item.tool_number.as_deref()),
            CalibrationSortKey::Outcome => SortValue::text(Some(item.outcome.as_str())),
            CalibrationSortKey::PerformedBy => SortValue::text(item.performed_by.as_deref()),
        }
    }
}

/// Newest calibrations first.
pub fn calibration_list_state(page_size: usize) -> CalibrationListState {
    ListState::new(
        CalibrationFilter::default(),
        SortConfig {
            key: CalibrationSortKey::CalibrationDate,
            direction: SortDirection::Descending,
        },
        page_size,
    )
}
