//! Single-column stable sorting.

use std::cmp::Ordering;

use log::trace;

use super::RowSet;
use crate::model::{Row, compare_fields};
use crate::state::{SortDirection, SortState};

/// Order rows by the active sort column.
///
/// With no active column, `rows` is returned as-is. Otherwise a new row set
/// is built and sorted stably: rows with equal keys keep their input order in
/// both directions. Values that cannot be compared (null, missing, mixed
/// types) count as equal.
pub fn sort_rows<R: Row>(records: &[R], rows: &RowSet, sort: &SortState) -> RowSet {
    let Some(key) = sort.key.as_deref() else {
        return rows.clone();
    };

    let mut sorted = rows.to_vec();
    merge_sort_by(&mut sorted, |&a, &b| {
        let ordering = compare_fields(
            records.get(a).and_then(|r| r.field(key)),
            records.get(b).and_then(|r| r.field(key)),
        );
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    trace!("Sorted {} rows by {} {}", sorted.len(), key, sort.direction);
    sorted.into()
}

/// Bottom-up stable merge sort.
///
/// "Incomparable means equal" is not a total order, which `slice::sort_by`
/// is allowed to panic on. Merging only ever asks "is right strictly less
/// than left", so any comparator yields a permutation of the input.
fn merge_sort_by<T: Copy>(items: &mut [T], mut compare: impl FnMut(&T, &T) -> Ordering) {
    let len = items.len();
    if len < 2 {
        return;
    }

    let mut buffer = items.to_vec();
    let mut width = 1;
    while width < len {
        let mut start = 0;
        while start < len {
            let mid = start.saturating_add(width).min(len);
            let end = start.saturating_add(width.saturating_mul(2)).min(len);
            merge(
                &items[start..mid],
                &items[mid..end],
                &mut buffer[start..end],
                &mut compare,
            );
            start = end;
        }
        items.copy_from_slice(&buffer);
        width = width.saturating_mul(2);
    }
}

fn merge<T: Copy>(
    left: &[T],
    right: &[T],
    out: &mut [T],
    compare: &mut impl FnMut(&T, &T) -> Ordering,
) {
    let (mut i, mut j) = (0, 0);
    for slot in out.iter_mut() {
        let take_left = j >= right.len()
            || (i < left.len() && compare(&right[j], &left[i]) != Ordering::Less);
        if take_left {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
}
