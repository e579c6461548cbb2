//! TableError for configuration and table events

/// Error type for table configuration and state transitions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// A page must hold at least one row.
    #[error("Page size must be at least 1")]
    ZeroPageSize,

    /// A sort was requested on a column the table does not show.
    #[error("Unknown column '{key}'")]
    UnknownColumn { key: String },
}

impl TableError {
    /// Creates a new unknown column error.
    pub fn unknown_column(key: impl Into<String>) -> Self {
        Self::UnknownColumn { key: key.into() }
    }
}
