//! Stack Browser - HTTP server
//!
//! Serves the navigation API and the static front end. All navigation
//! state lives in one engine owned by [`state::AppState`].

mod assets;
mod state;
mod transport;

use std::sync::Arc;

use stackbrowser_core::Config;

use assets::DirectoryAssets;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stackbrowser_core::init_logging();

    let config = Config::from_env()?;
    let assets = DirectoryAssets::new(config.static_dir.clone());
    let state = AppState::new(&config, Arc::new(assets));

    tracing::info!(
        url = %config.public_url(),
        static_dir = %config.static_dir.display(),
        history_capacity = config.history_capacity,
        "Stack Browser server starting, open the URL in a browser"
    );

    transport::serve(&config, state).await?;

    tracing::info!("Stack Browser server stopped");
    Ok(())
}
