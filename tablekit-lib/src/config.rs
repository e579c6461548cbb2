//! Table configuration.

use std::num::NonZeroUsize;
use std::time::Duration;

use crate::error::TableError;
use crate::model::Column;

/// Rows shown per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(4).unwrap();

/// Quiet period before a search query is applied.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Per-table configuration.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use tablekit_lib::{Column, TableConfig};
///
/// let config = TableConfig::new()
///     .page_size(10)
///     .unwrap()
///     .debounce(Duration::from_millis(250))
///     .columns(vec![Column::new("id", "ID"), Column::new("name", "Name")]);
///
/// assert_eq!(config.page_size.get(), 10);
/// assert!(TableConfig::new().page_size(0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TableConfig {
    /// Rows per page.
    pub page_size: NonZeroUsize,

    /// Delay before a burst of search edits is applied.
    pub debounce: Duration,

    /// Static column list. `None` derives columns from the first record.
    pub columns: Option<Vec<Column>>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            debounce: DEFAULT_DEBOUNCE,
            columns: None,
        }
    }
}

impl TableConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set rows per page. Zero is rejected.
    pub fn page_size(mut self, rows: usize) -> Result<Self, TableError> {
        self.page_size = NonZeroUsize::new(rows).ok_or(TableError::ZeroPageSize)?;
        Ok(self)
    }

    /// Set the search debounce delay.
    pub fn debounce(mut self, delay: Duration) -> Self {
        self.debounce = delay;
        self
    }

    /// Use a static column list instead of deriving it from the data.
    pub fn columns(mut self, columns: Vec<Column>) -> Self {
        self.columns = Some(columns);
        self
    }
}
