//! Serializable snapshot of navigation state

use serde::{Deserialize, Serialize};
use std::fmt;

use stackbrowser_history::PageEntry;

use crate::engine::NavigationEngine;

/// Read-only view of the engine. Stack lists are ordered most recent first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateView {
    pub current_page: PageEntry,
    pub back_stack: Vec<PageEntry>,
    pub forward_stack: Vec<PageEntry>,
    pub back_count: usize,
    pub forward_count: usize,
}

impl StateView {
    pub fn capture(engine: &NavigationEngine) -> Self {
        Self {
            current_page: engine.current_page().clone(),
            back_stack: engine.back_stack().iter().cloned().collect(),
            forward_stack: engine.forward_stack().iter().cloned().collect(),
            back_count: engine.back_stack().len(),
            forward_count: engine.forward_stack().len(),
        }
    }
}

impl fmt::Display for StateView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current page: {} ({})", self.current_page.title, self.current_page.url)?;
        writeln!(
            f,
            "Back history: {} pages, forward history: {} pages",
            self.back_count, self.forward_count
        )?;
        write_stack(f, "Back stack", &self.back_stack)?;
        write_stack(f, "Forward stack", &self.forward_stack)
    }
}

// Positions count from the bottom of the stack, so the top entry has the
// highest number.
fn write_stack(f: &mut fmt::Formatter<'_>, label: &str, entries: &[PageEntry]) -> fmt::Result {
    writeln!(f, "--- {label} ---")?;
    if entries.is_empty() {
        return writeln!(f, "  (empty)");
    }
    for (i, entry) in entries.iter().enumerate() {
        writeln!(f, "  {:>3} | {} | {}", entries.len() - i, entry.url, entry.title)?;
    }
    Ok(())
}
