use crate::list::{
    ListFilter, ListItem, ListState, SearchTerm, SortConfig, SortKey, SortValue, matches_exact,
    parse_key,
};
use shared::supplyline::tool::{Tool, ToolStatus};
use std::str::FromStr;

pub type ToolListState = ListState<ToolFilter, ToolSortKey>;

impl ListItem for Tool {
    fn id(&self) -> i64 {
        self.id
    }

    fn matches_search(&self, term: &SearchTerm) -> bool {
        term.matches_any([
            Some(self.tool_number.as_str()),
            Some(self.serial_number.as_str()),
            self.description.as_deref(),
            self.location.as_deref(),
        ])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolFilter {
    pub category: Option<String>,
    pub status: Option<ToolStatus>,
    pub condition: Option<String>,
}

impl ListFilter<Tool> for ToolFilter {
    fn matches(&self, item: &Tool) -> bool {
        matches_exact(self.status.as_ref(), Some(&item.status))
            && matches_exact(self.category.as_deref(), item.category.as_deref())
            && matches_exact(self.condition.as_deref(), item.condition.as_deref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolSortKey {
    ToolNumber,
    SerialNumber,
    Description,
    Category,
    Condition,
    Location,
    Status,
    NextCalibrationDate,
}

const SORT_KEYS: [(&str, ToolSortKey); 8] = [
    ("tool_number", ToolSortKey::ToolNumber),
    ("serial_number", ToolSortKey::SerialNumber),
    ("description", ToolSortKey::Description),
    ("category", ToolSortKey::Category),
    ("condition", ToolSortKey::Condition),
    ("location", ToolSortKey::Location),
    ("status", ToolSortKey::Status),
    ("next_calibration_date", ToolSortKey::NextCalibrationDate),
];

impl FromStr for ToolSortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key(s, &SORT_KEYS)
    }
}

impl SortKey<Tool> for ToolSortKey {
    type Context = ();

    fn sort_value(self, item: &Tool, _ctx: &()) -> SortValue {
        match self {
            ToolSortKey::ToolNumber => SortValue::text(Some(item.tool_number.as_str())),
            ToolSortKey::SerialNumber => SortValue::text(Some(item.serial_number.as_str())),
            ToolSortKey::Description => SortValue::text(item.description.as_deref()),
            ToolSortKey::Category => SortValue::text(item.category.as_deref()),
            ToolSortKey::Condition => SortValue::text(item.condition.as_deref()),
            ToolSortKey::Location => SortValue::text(item.location.as_deref()),
            ToolSortKey::Status => SortValue::text(Some(item.status.as_str())),
            ToolSortKey::NextCalibrationDate => SortValue::Date(item.next_calibration_date),
        }
    }
}

pub fn tool_list_state(page_size: usize) -> ToolListState {
    ListState::new(
        ToolFilter::default(),
        SortConfig::ascending(ToolSortKey::ToolNumber),
        page_size,
    )
}
