//! Stack Browser Navigation
//!
//! Two-stack navigation model:
//! ```text
//!   back stack  <-  current page  ->  forward stack
//! ```
//! `navigate_to` pushes the current page onto the back stack and discards
//! all forward history. `go_back` / `go_forward` swap the current page with
//! the top of the opposite stack.

mod engine;
mod view;

pub use engine::NavigationEngine;
pub use view::StateView;

pub use stackbrowser_history::{HistoryStack, PageEntry};
