//! Column descriptors

use serde::{Deserialize, Serialize};

use super::Row;

/// A table column: the record field it shows and its header text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Field key looked up in each record.
    pub key: String,
    /// Header text displayed at the top.
    pub label: String,
}

impl Column {
    /// Create a new column with the given key and label.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }

    /// Derive columns from the keys of the first record.
    ///
    /// Labels are the keys themselves. An empty record set has no columns.
    pub fn from_first<R: Row>(records: &[R]) -> Vec<Column> {
        records
            .first()
            .map(|first| first.keys().map(|k| Column::new(k, k)).collect())
            .unwrap_or_default()
    }

    /// Parse a `key:Label` pair. A bare `key` uses the key as its label.
    pub fn parse(text: &str) -> Option<Column> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        match text.split_once(':') {
            Some((key, label)) if !key.trim().is_empty() => {
                Some(Column::new(key.trim(), label.trim()))
            }
            Some(_) => None,
            None => Some(Column::new(text, text)),
        }
    }
}
