//! Navigation state machine
//!
//! State is the tuple (current page, back stack, forward stack). There is no
//! separate state enum; the four transitions below are the only mutators.

use stackbrowser_history::{HistoryStack, PageEntry, DEFAULT_CAPACITY};

use crate::view::StateView;

#[derive(Debug, Clone)]
pub struct NavigationEngine {
    current_page: PageEntry,
    back_stack: HistoryStack,
    forward_stack: HistoryStack,
}

impl NavigationEngine {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an engine whose back and forward stacks each hold `capacity` pages
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            current_page: PageEntry::blank(),
            back_stack: HistoryStack::with_capacity(capacity),
            forward_stack: HistoryStack::with_capacity(capacity),
        }
    }

    /// Navigate to a new page.
    ///
    /// The previous page joins the back history unless it is the blank
    /// placeholder. All forward history is discarded. Overlong fields are
    /// truncated, never rejected.
    pub fn navigate_to(&mut self, url: &str, title: &str) {
        let next = PageEntry::new(url, title);
        let previous = std::mem::replace(&mut self.current_page, next);

        if !previous.is_blank() {
            self.back_stack.push(previous);
        }
        self.forward_stack.clear();

        tracing::info!(
            url = %self.current_page.url,
            title = %self.current_page.title,
            "Navigated"
        );
    }

    /// Step back one page. Returns `false` without touching any state when
    /// there is no back history.
    pub fn go_back(&mut self) -> bool {
        let Some(previous) = self.back_stack.pop() else {
            tracing::info!("Cannot go back, no previous pages in history");
            return false;
        };

        let current = std::mem::replace(&mut self.current_page, previous);
        self.forward_stack.push(current);

        tracing::info!(
            url = %self.current_page.url,
            title = %self.current_page.title,
            "Went back"
        );
        true
    }

    /// Step forward one page. Mirror image of [`Self::go_back`].
    pub fn go_forward(&mut self) -> bool {
        let Some(next) = self.forward_stack.pop() else {
            tracing::info!("Cannot go forward, no pages available");
            return false;
        };

        let current = std::mem::replace(&mut self.current_page, next);
        self.back_stack.push(current);

        tracing::info!(
            url = %self.current_page.url,
            title = %self.current_page.title,
            "Went forward"
        );
        true
    }

    /// Clear all history and return to the blank page
    pub fn reset(&mut self) {
        self.back_stack.clear();
        self.forward_stack.clear();
        self.current_page = PageEntry::blank();

        tracing::info!("Browser reset, all history cleared");
    }

    pub fn current_page(&self) -> &PageEntry {
        &self.current_page
    }

    pub fn back_stack(&self) -> &HistoryStack {
        &self.back_stack
    }

    pub fn forward_stack(&self) -> &HistoryStack {
        &self.forward_stack
    }

    pub fn can_go_back(&self) -> bool {
        !self.back_stack.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward_stack.is_empty()
    }

    /// Snapshot the current state for serialization
    pub fn view(&self) -> StateView {
        StateView::capture(self)
    }
}

impl Default for NavigationEngine {
    fn default() -> Self {
        Self::new()
    }
}
