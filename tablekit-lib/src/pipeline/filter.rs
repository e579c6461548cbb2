//! Free-text filtering across all fields.

use log::trace;

use super::RowSet;
use crate::model::Row;

/// Returns `true` if any field of `record` contains `needle`.
///
/// `needle` must already be lowercased.
pub fn record_matches<R: Row>(record: &R, needle: &str) -> bool {
    record.values().any(|value| value.contains_lowercase(needle))
}

/// Keep the rows whose record matches `query` in any field.
///
/// Matching is a case-insensitive substring test on each field's string
/// form. An empty query returns `rows` itself.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use tablekit_lib::pipeline::filter_rows;
/// use tablekit_lib::{Record, all_rows};
///
/// let records = vec![
///     Record::new().set("name", "Alice"),
///     Record::new().set("name", "bob"),
/// ];
/// let rows = all_rows(records.len());
///
/// assert_eq!(&*filter_rows(&records, &rows, "BO"), &[1]);
/// assert!(Arc::ptr_eq(&filter_rows(&records, &rows, ""), &rows));
/// ```
pub fn filter_rows<R: Row>(records: &[R], rows: &RowSet, query: &str) -> RowSet {
    if query.is_empty() {
        return rows.clone();
    }

    let needle = query.to_lowercase();
    let filtered: RowSet = rows
        .iter()
        .copied()
        .filter(|&index| {
            records
                .get(index)
                .is_some_and(|record| record_matches(record, &needle))
        })
        .collect();

    trace!(
        "Filtered {} rows to {} for query {:?}",
        rows.len(),
        filtered.len(),
        query
    );
    filtered
}
