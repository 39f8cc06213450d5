//! Stack Browser Core
//!
//! Transport-independent request handling: an abstract HTTP request goes in,
//! the navigation engine is driven, and an abstract HTTP response with a JSON
//! envelope comes out. Socket handling and file I/O live in the server binary.

mod assets;
mod body;
mod config;
mod envelope;
mod error;
mod http;
mod router;

pub use assets::StaticAssets;
pub use body::extract_field;
pub use config::Config;
pub use envelope::{Envelope, Status};
pub use error::CoreError;
pub use http::{HttpRequest, HttpResponse};
pub use router::RequestRouter;

// Re-export core components
pub use stackbrowser_history::{HistoryStack, PageEntry, DEFAULT_CAPACITY, MAX_FIELD_LENGTH};
pub use stackbrowser_navigation::{NavigationEngine, StateView};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
