//! Stack Browser History
//!
//! Page entries and the bounded LIFO stacks that hold back and forward history.
//! Capacity problems are reported as values, never as errors.

mod page;
mod stack;

pub use page::{PageEntry, BLANK_TITLE, BLANK_URL, MAX_FIELD_LENGTH};
pub use stack::{HistoryStack, DEFAULT_CAPACITY};
