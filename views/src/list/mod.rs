//! The filter → sort → paginate pipeline behind every resource table.
//!
//! Each resource provides a filter type implementing [`ListFilter`] and a sort
//! key enum implementing [`SortKey`]. [`ListState`] owns the user's current
//! search term, filter, sort and page, and recomputes the visible [`Page`] from
//! the full collection on demand.

pub mod calibrations;
pub mod chemicals;
pub mod cycle_counts;
pub mod kits;
pub mod tools;

use chrono::{DateTime, NaiveDate, Utc};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use tracing::trace;

pub const DEFAULT_PAGE_SIZE: usize = 30;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub const fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "asc"),
            SortDirection::Descending => write!(f, "desc"),
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(format!("unknown sort direction {other:?}, expected asc or desc")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig<K> {
    pub key: K,
    pub direction: SortDirection,
}

impl<K: Copy + PartialEq> SortConfig<K> {
    pub const fn ascending(key: K) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    /// Same column flips the direction; a new column starts ascending.
    pub fn request(&mut self, key: K) {
        if self.key == key {
            self.direction = self.direction.toggled();
        } else {
            self.key = key;
            self.direction = SortDirection::Ascending;
        }
    }
}

/// A typed value extracted from a row for comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Number(f64),
    Date(Option<NaiveDate>),
    Timestamp(Option<DateTime<Utc>>),
    /// Lowercased; absent text is stored as empty.
    Text(String),
}

impl SortValue {
    pub fn text(value: Option<&str>) -> Self {
        SortValue::Text(value.unwrap_or_default().to_lowercase())
    }

    fn compare(&self, other: &Self, direction: SortDirection) -> Ordering {
        match (self, other) {
            (SortValue::Number(a), SortValue::Number(b)) => direction.apply(a.total_cmp(b)),
            (SortValue::Date(a), SortValue::Date(b)) => compare_absent_last(a, b, direction),
            (SortValue::Timestamp(a), SortValue::Timestamp(b)) => {
                compare_absent_last(a, b, direction)
            }
            (SortValue::Text(a), SortValue::Text(b)) => direction.apply(a.cmp(b)),
            _ => Ordering::Equal,
        }
    }
}

// Missing dates stay at the bottom regardless of direction.
fn compare_absent_last<T: Ord>(a: &Option<T>, b: &Option<T>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => direction.apply(a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub trait ListItem {
    fn id(&self) -> i64;
    fn matches_search(&self, term: &SearchTerm) -> bool;
}

pub trait ListFilter<T> {
    fn matches(&self, item: &T) -> bool;
}

pub trait SortKey<T>: Copy + PartialEq {
    /// Lookup data needed to derive some keys, e.g. warehouse names.
    type Context;

    fn sort_value(self, item: &T, ctx: &Self::Context) -> SortValue;
}

/// A normalized, case-insensitive search needle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// OR across fields. An empty term matches everything.
    pub fn matches_any<'a>(&self, fields: impl IntoIterator<Item = Option<&'a str>>) -> bool {
        self.is_empty()
            || fields
                .into_iter()
                .flatten()
                .any(|field| field.to_lowercase().contains(&self.0))
    }
}

/// Optional exact-match filter value; `None` matches everything.
pub fn matches_exact<T: PartialEq + ?Sized>(wanted: Option<&T>, actual: Option<&T>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => actual == Some(wanted),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: Vec<&'a T>,
    /// 1-based.
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<'_, T> {
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1 && self.total_pages > 0
    }
}

pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        total_items.div_ceil(page_size)
    }
}

/// The slice visible on a 1-based `page`. Out-of-range pages are empty.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if page == 0 || start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Filtered and sorted rows, before pagination. Ties keep ascending id order.
pub fn filter_and_sort<'a, T, F, K>(
    items: &'a [T],
    search: &SearchTerm,
    filter: &F,
    sort: SortConfig<K>,
    ctx: &K::Context,
) -> Vec<&'a T>
where
    T: ListItem,
    F: ListFilter<T>,
    K: SortKey<T>,
{
    let mut keyed: Vec<(SortValue, &T)> = items
        .iter()
        .filter(|item| filter.matches(item) && item.matches_search(search))
        .map(|item| (sort.key.sort_value(item, ctx), item))
        .collect();

    keyed.sort_by(|(a_value, a), (b_value, b)| {
        a_value
            .compare(b_value, sort.direction)
            .then_with(|| a.id().cmp(&b.id()))
    });

    keyed.into_iter().map(|(_, item)| item).collect()
}

/// Search, filter, sort and page state for one table.
#[derive(Debug, Clone)]
pub struct ListState<F, K> {
    search: SearchTerm,
    filter: F,
    sort: SortConfig<K>,
    page: usize,
    page_size: usize,
}

impl<F, K: Copy + PartialEq> ListState<F, K> {
    pub fn new(filter: F, sort: SortConfig<K>, page_size: usize) -> Self {
        Self {
            search: SearchTerm::default(),
            filter,
            sort,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn search(&self) -> &SearchTerm {
        &self.search
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    pub fn sort(&self) -> SortConfig<K> {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_search(&mut self, raw: &str) {
        self.search = SearchTerm::new(raw);
        self.page = 1;
    }

    pub fn update_filter(&mut self, update: impl FnOnce(&mut F)) {
        update(&mut self.filter);
        self.page = 1;
    }

    /// Column header click.
    pub fn request_sort(&mut self, key: K) {
        self.sort.request(key);
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortConfig<K>) {
        self.sort = sort;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn apply<'a, T>(&self, items: &'a [T], ctx: &K::Context) -> Page<'a, T>
    where
        T: ListItem,
        F: ListFilter<T>,
        K: SortKey<T>,
    {
        let rows = filter_and_sort(items, &self.search, &self.filter, self.sort, ctx);
        let total_items = rows.len();
        let visible = paginate(&rows, self.page, self.page_size).to_vec();
        trace!(
            total = items.len(),
            matched = total_items,
            page = self.page,
            visible = visible.len(),
            "recomputed list view"
        );
        Page {
            items: visible,
            page: self.page,
            page_size: self.page_size,
            total_items,
            total_pages: total_pages(total_items, self.page_size),
        }
    }
}

/// Parses a sort key name, e.g. from a CLI flag.
pub fn parse_key<K: Copy>(raw: &str, known: &[(&str, K)]) -> Result<K, String> {
    known
        .iter()
        .find(|(name, _)| *name == raw.trim())
        .map(|(_, key)| *key)
        .ok_or_else(|| {
            let names: Vec<&str> = known.iter().map(|(name, _)| *name).collect();
            format!("unknown sort key {raw:?}, expected one of {}", names.join(", "))
        })
}

/// A comma-separated allow-list; empty or `all` allows everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList<S>(Option<Vec<S>>);

impl<S: PartialEq> AllowList<S> {
    pub const fn everything() -> Self {
        Self(None)
    }

    pub fn only(values: Vec<S>) -> Self {
        Self(Some(values))
    }

    pub fn allows(&self, value: &S) -> bool {
        match &self.0 {
            None => true,
            Some(values) => values.contains(value),
        }
    }
}

impl<S> FromStr for AllowList<S>
where
    S: FromStr<Err = String> + PartialEq,
{
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::everything());
        }
        trimmed
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(S::from_str)
            .collect::<Result<Vec<_>, _>>()
            .map(Self::only)
    }
}
