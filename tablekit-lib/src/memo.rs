//! Single-entry memoization for pipeline stages.

use std::sync::Arc;

/// Caches the last computed value together with the key it was computed for.
#[derive(Debug)]
pub(crate) struct Memo<K, V> {
    entry: Option<(K, V)>,
}

impl<K: PartialEq, V: Clone> Memo<K, V> {
    pub(crate) fn new() -> Self {
        Self { entry: None }
    }

    /// Return the cached value if `key` matches, otherwise compute and store it.
    pub(crate) fn get_or_compute(&mut self, key: K, compute: impl FnOnce() -> V) -> V {
        match &self.entry {
            Some((cached, value)) if *cached == key => value.clone(),
            _ => {
                let value = compute();
                self.entry = Some((key, value.clone()));
                value
            }
        }
    }

    pub(crate) fn clear(&mut self) {
        self.entry = None;
    }
}

/// Compares shared slices by address instead of contents.
#[derive(Debug)]
pub(crate) struct ByAddress<T: ?Sized>(pub Arc<T>);

impl<T: ?Sized> PartialEq for ByAddress<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
