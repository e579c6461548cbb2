//! Table view: records, columns and state behind one pipeline.
//!
//! The view owns the only copy of the table state and applies events to it
//! synchronously. Stage results are memoized: filtering is redone only when
//! the records or the query change, sorting only when the filtered rows or
//! the sort state change. The current page is a cheap slice of the sorted
//! rows and is rebuilt on demand.

use std::ops::Range;
use std::sync::Arc;

use log::{debug, warn};

use crate::config::TableConfig;
use crate::error::TableError;
use crate::memo::{ByAddress, Memo};
use crate::model::{Column, Row};
use crate::pipeline::{self, RowSet};
use crate::state::{SortState, TableState};

/// A user interaction that changes the table state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// The (debounced) search text changed.
    Query(String),
    /// A column header was clicked.
    SortBy(String),
    /// The "previous page" control was used.
    PrevPage,
    /// The "next page" control was used.
    NextPage,
}

/// One page of the filtered and sorted rows.
#[derive(Debug, Clone)]
pub struct Page {
    number: usize,
    total_pages: usize,
    range: Range<usize>,
    rows: RowSet,
}

impl Page {
    /// Record indices shown on this page, in display order.
    pub fn indices(&self) -> &[usize] {
        &self.rows[self.range.clone()]
    }

    /// Page number, 1-based.
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Number of rows across all pages.
    pub fn total_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Whether "previous" should be enabled.
    pub fn has_prev(&self) -> bool {
        pipeline::has_prev(self.number)
    }

    /// Whether "next" should be enabled.
    pub fn has_next(&self) -> bool {
        pipeline::has_next(self.number, self.total_pages)
    }

    /// Position indicator, e.g. `"2 of 3"`.
    pub fn label(&self) -> String {
        format!("{} of {}", self.number, self.total_pages)
    }
}

/// A searchable, sortable, paginated table over shared records.
#[derive(Debug)]
pub struct TableView<R> {
    records: Arc<[R]>,
    columns: Vec<Column>,
    derive_columns: bool,
    state: TableState,
    generation: u64,
    all: RowSet,
    filtered: Memo<(u64, String), RowSet>,
    sorted: Memo<(ByAddress<[usize]>, SortState), RowSet>,
}

impl<R: Row> TableView<R> {
    /// Create a view over `records`.
    ///
    /// Columns come from the config, or from the first record's keys.
    pub fn new(records: impl Into<Arc<[R]>>, config: &TableConfig) -> Self {
        let records = records.into();
        let derive_columns = config.columns.is_none();
        let columns = match &config.columns {
            Some(columns) => columns.clone(),
            None => Column::from_first(&records),
        };
        debug!(
            "New table view: {} records, {} columns, {} rows per page",
            records.len(),
            columns.len(),
            config.page_size
        );

        Self {
            all: pipeline::all_rows(records.len()),
            records,
            columns,
            derive_columns,
            state: TableState::new(config.page_size),
            generation: 0,
            filtered: Memo::new(),
            sorted: Memo::new(),
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Look up a record by the index stored in a row set.
    pub fn record(&self, index: usize) -> Option<&R> {
        self.records.get(index)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    /// Swap in a new record collection, keeping query and sort.
    ///
    /// The current page is pulled back into range if the new data is shorter.
    pub fn set_records(&mut self, records: impl Into<Arc<[R]>>) {
        self.records = records.into();
        self.all = pipeline::all_rows(self.records.len());
        self.generation += 1;
        if self.derive_columns {
            self.columns = Column::from_first(&self.records);
            if let Some(key) = self.state.sort().key.as_deref()
                && !self.has_column(key)
            {
                self.state.set_sort(SortState::default());
            }
        }
        self.filtered.clear();
        self.sorted.clear();

        let total = self.total_pages();
        self.state.clamp_page(total);
        debug!("Records replaced: {} records", self.records.len());
    }

    /// Rows matching the current query, in input order.
    pub fn filtered(&mut self) -> RowSet {
        let key = (self.generation, self.state.query().to_string());
        let (records, all, query) = (&self.records, &self.all, self.state.query());
        self.filtered
            .get_or_compute(key, || pipeline::filter_rows(records, all, query))
    }

    /// Filtered rows in sort order.
    pub fn sorted(&mut self) -> RowSet {
        let filtered = self.filtered();
        let key = (ByAddress(filtered.clone()), self.state.sort().clone());
        let (records, sort) = (&self.records, self.state.sort());
        self.sorted
            .get_or_compute(key, || pipeline::sort_rows(records, &filtered, sort))
    }

    /// Page count over the filtered and sorted rows. Always at least 1.
    pub fn total_pages(&mut self) -> usize {
        pipeline::total_pages(self.sorted().len(), self.state.page_size())
    }

    /// The current page.
    pub fn page(&mut self) -> Page {
        let rows = self.sorted();
        let number = self.state.page();
        let page_size = self.state.page_size();
        Page {
            number,
            total_pages: pipeline::total_pages(rows.len(), page_size),
            range: pipeline::page_range(rows.len(), number, page_size),
            rows,
        }
    }

    /// Apply a user interaction. Returns whether the state changed.
    pub fn apply(&mut self, event: TableEvent) -> Result<bool, TableError> {
        match event {
            TableEvent::Query(query) => Ok(self.state.set_query(query)),
            TableEvent::SortBy(key) => {
                if !self.has_column(&key) {
                    warn!("Ignoring sort on unknown column {:?}", key);
                    return Err(TableError::unknown_column(key));
                }
                self.state.toggle_sort(&key);
                Ok(true)
            }
            TableEvent::PrevPage => Ok(self.state.prev_page()),
            TableEvent::NextPage => {
                let total = self.total_pages();
                Ok(self.state.next_page(total))
            }
        }
    }

    fn has_column(&self, key: &str) -> bool {
        self.columns.iter().any(|c| c.key == key)
    }
}
