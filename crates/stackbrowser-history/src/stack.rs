//! Bounded history stack
//!
//! Backed by a `Vec` with a logical capacity. A push onto a full stack drops
//! the incoming entry; the oldest history is never evicted.

use crate::page::PageEntry;

/// Default number of entries a stack will hold.
pub const DEFAULT_CAPACITY: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStack {
    entries: Vec<PageEntry>,
    capacity: usize,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Push an entry on top. Returns `false` and leaves the stack untouched
    /// when it is already full.
    pub fn push(&mut self, entry: PageEntry) -> bool {
        if self.is_full() {
            tracing::warn!(
                url = %entry.url,
                capacity = self.capacity,
                "History stack full, dropping page"
            );
            return false;
        }

        tracing::debug!(url = %entry.url, title = %entry.title, "Pushed page");
        self.entries.push(entry);
        true
    }

    /// Remove and return the most recent entry
    pub fn pop(&mut self) -> Option<PageEntry> {
        let entry = self.entries.pop();
        if entry.is_none() {
            tracing::debug!("History stack empty, nothing to pop");
        }
        entry
    }

    pub fn peek(&self) -> Option<&PageEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries ordered most recent first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &PageEntry> + ExactSizeIterator {
        self.entries.iter().rev()
    }
}

impl Default for HistoryStack {
    fn default() -> Self {
        Self::new()
    }
}
