//! Paged results.

/// One page of items plus the backend's total record count.
///
/// Rebuilt on every fetch; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items on this page, in backend order.
    pub items: Vec<T>,
    /// Total matching records across all pages.
    pub total_count: i64,
}

impl<T> Page<T> {
    /// Create a page from items and the backend total.
    #[must_use]
    pub const fn new(items: Vec<T>, total_count: i64) -> Self {
        Self { items, total_count }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::new(Vec::new(), 0)
    }
}
