//! The filter → sort → paginate pipeline.
//!
//! Every stage works on a [`RowSet`]: an ordered, shared list of indices into
//! the record slice. Records are never moved or mutated. A stage with nothing
//! to do hands back the same `Arc` it was given, so callers can detect "no
//! change" with [`Arc::ptr_eq`].

mod filter;
mod page;
mod sort;

use std::sync::Arc;

pub use filter::{filter_rows, record_matches};
pub use page::{has_next, has_prev, page_range, paginate, total_pages};
pub use sort::sort_rows;

/// Ordered indices into a record slice.
pub type RowSet = Arc<[usize]>;

/// The row set covering `len` records in input order.
pub fn all_rows(len: usize) -> RowSet {
    (0..len).collect()
}
