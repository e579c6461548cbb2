//! Table state: query, sort and page.
//!
//! `TableState` holds the inputs of the pipeline and the transitions that user
//! interactions trigger. It never looks at records; anything that depends on
//! the row count takes `total_pages` from the caller.

use std::fmt;
use std::num::NonZeroUsize;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::pipeline::{has_next, has_prev};

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smaller values first.
    #[default]
    #[serde(alias = "asc")]
    Ascending,
    /// Larger values first.
    #[serde(alias = "desc")]
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("asc"),
            SortDirection::Descending => f.write_str("desc"),
        }
    }
}

/// Active sort column and direction. No column means input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SortState {
    pub key: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    /// Sort by `key` in the given direction.
    pub fn by(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: Some(key.into()),
            direction,
        }
    }

    /// Whether `key` is the active sort column.
    pub fn is_active(&self, key: &str) -> bool {
        self.key.as_deref() == Some(key)
    }
}

/// Query, sort and page state of one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    query: String,
    sort: SortState,
    page: usize,
    page_size: NonZeroUsize,
}

impl TableState {
    /// Fresh state: empty query, input order, page 1.
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            query: String::new(),
            sort: SortState::default(),
            page: 1,
            page_size,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    /// Current page, 1-based.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// Replace the query. Always resets to page 1.
    ///
    /// Returns whether anything changed.
    pub fn set_query(&mut self, query: impl Into<String>) -> bool {
        let query = query.into();
        let changed = query != self.query || self.page != 1;
        if query != self.query {
            debug!("Query changed: {:?} -> {:?}", self.query, query);
            self.query = query;
        }
        self.page = 1;
        changed
    }

    /// Header click: same column flips direction, a new column sorts ascending.
    pub fn toggle_sort(&mut self, key: &str) {
        if self.sort.is_active(key) {
            self.sort.direction = self.sort.direction.toggled();
        } else {
            self.sort = SortState::by(key, SortDirection::Ascending);
        }
        debug!("Sort by {} {}", key, self.sort.direction);
    }

    /// Set the sort state directly.
    pub fn set_sort(&mut self, sort: SortState) {
        self.sort = sort;
    }

    /// Go back one page if not already on the first.
    pub fn prev_page(&mut self) -> bool {
        if has_prev(self.page) {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Go forward one page if not already on the last.
    pub fn next_page(&mut self, total_pages: usize) -> bool {
        if has_next(self.page, total_pages) {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Pull the current page back into `[1, total_pages]`.
    pub fn clamp_page(&mut self, total_pages: usize) -> bool {
        let clamped = self.page.clamp(1, total_pages.max(1));
        let changed = clamped != self.page;
        if changed {
            debug!("Clamped page {} to {}", self.page, clamped);
            self.page = clamped;
        }
        changed
    }
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> TableState {
        TableState::new(NonZeroUsize::new(4).unwrap())
    }

    #[test]
    fn test_toggle_sort_same_column_flips() {
        let mut state = state();
        state.toggle_sort("age");
        assert_eq!(state.sort(), &SortState::by("age", SortDirection::Ascending));
        state.toggle_sort("age");
        assert_eq!(state.sort(), &SortState::by("age", SortDirection::Descending));
        state.toggle_sort("age");
        assert_eq!(state.sort().direction, SortDirection::Ascending);
    }

    #[test]
    fn test_toggle_sort_new_column_resets_to_ascending() {
        let mut state = state();
        state.toggle_sort("age");
        state.toggle_sort("age");
        state.toggle_sort("name");
        assert_eq!(state.sort(), &SortState::by("name", SortDirection::Ascending));
    }

    #[test]
    fn test_set_query_resets_page() {
        let mut state = state();
        assert!(state.next_page(3));
        assert!(state.next_page(3));
        assert_eq!(state.page(), 3);

        assert!(state.set_query("bo"));
        assert_eq!(state.page(), 1);
        assert_eq!(state.query(), "bo");
        assert!(!state.set_query("bo"));
    }

    #[test]
    fn test_page_navigation_stays_in_bounds() {
        let mut state = state();
        assert!(!state.prev_page());
        assert!(state.next_page(2));
        assert!(!state.next_page(2));
        assert_eq!(state.page(), 2);
        assert!(state.prev_page());
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_clamp_page() {
        let mut state = state();
        state.next_page(5);
        state.next_page(5);
        assert!(state.clamp_page(2));
        assert_eq!(state.page(), 2);
        assert!(state.clamp_page(0));
        assert_eq!(state.page(), 1);
        assert!(!state.clamp_page(1));
    }

    #[test]
    fn test_direction_serde_accepts_short_names() {
        let dir: SortDirection = serde_json::from_str("\"desc\"").unwrap();
        assert_eq!(dir, SortDirection::Descending);
        let dir: SortDirection = serde_json::from_str("\"ascending\"").unwrap();
        assert_eq!(dir, SortDirection::Ascending);
    }
}
