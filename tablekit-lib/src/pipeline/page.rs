//! Fixed-size, 1-based pagination.
//!
//! The paginator never clamps the requested page. Out-of-range pages give an
//! empty slice; keeping the page in range is the job of whoever drives the
//! navigation, using [`has_prev`] and [`has_next`] with the same
//! [`total_pages`].

use std::num::NonZeroUsize;
use std::ops::Range;

/// Number of pages needed for `len` rows. Always at least 1.
pub fn total_pages(len: usize, page_size: NonZeroUsize) -> usize {
    len.div_ceil(page_size.get()).max(1)
}

/// Index range `[(page - 1) * size, page * size)` clipped to `len`.
pub fn page_range(len: usize, page: usize, page_size: NonZeroUsize) -> Range<usize> {
    let size = page_size.get();
    let start = page.saturating_sub(1).saturating_mul(size).min(len);
    let end = start.saturating_add(size).min(len);
    start..end
}

/// The rows on `page`.
pub fn paginate<T>(rows: &[T], page: usize, page_size: NonZeroUsize) -> &[T] {
    &rows[page_range(rows.len(), page, page_size)]
}

/// Whether a previous page exists.
pub fn has_prev(page: usize) -> bool {
    page > 1
}

/// Whether a next page exists.
pub fn has_next(page: usize, total_pages: usize) -> bool {
    page < total_pages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, size(4)), 1);
        assert_eq!(total_pages(1, size(4)), 1);
        assert_eq!(total_pages(4, size(4)), 1);
        assert_eq!(total_pages(5, size(4)), 2);
        assert_eq!(total_pages(10, size(4)), 3);
        assert_eq!(total_pages(10, size(1)), 10);
    }

    #[test]
    fn test_page_range() {
        assert_eq!(page_range(10, 1, size(4)), 0..4);
        assert_eq!(page_range(10, 3, size(4)), 8..10);
        assert_eq!(page_range(10, 4, size(4)), 10..10);
        assert_eq!(page_range(0, 1, size(4)), 0..0);
    }

    #[test]
    fn test_paginate_last_page_is_partial() {
        let rows: Vec<usize> = (0..10).collect();
        assert_eq!(paginate(&rows, 3, size(4)), &[8, 9]);
        assert!(paginate(&rows, 9, size(4)).is_empty());
    }

    #[test]
    fn test_navigation_bounds() {
        assert!(!has_prev(1));
        assert!(has_prev(2));
        assert!(has_next(2, 3));
        assert!(!has_next(3, 3));
        assert!(!has_next(1, 1));
    }
}
