//! Server configuration

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

use stackbrowser_history::DEFAULT_CAPACITY;

use crate::error::CoreError;
use crate::Result;

const ENV_ADDR: &str = "STACKBROWSER_ADDR";
const ENV_STATIC_DIR: &str = "STACKBROWSER_STATIC_DIR";
const ENV_HISTORY_CAPACITY: &str = "STACKBROWSER_HISTORY_CAPACITY";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Address the HTTP server listens on
    pub bind_addr: SocketAddr,
    /// Directory holding index.html, styles.css and script.js
    pub static_dir: PathBuf,
    /// Maximum pages kept in each of the back and forward stacks
    pub history_capacity: usize,
}

impl Config {
    /// Defaults overlaid with any `STACKBROWSER_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup(ENV_ADDR) {
            config.bind_addr = addr.trim().parse()?;
        }

        if let Some(dir) = lookup(ENV_STATIC_DIR) {
            config.static_dir = PathBuf::from(dir);
        }

        if let Some(capacity) = lookup(ENV_HISTORY_CAPACITY) {
            let capacity: usize = capacity.trim().parse().map_err(|_| {
                CoreError::Config(format!("{ENV_HISTORY_CAPACITY} must be a number, got {capacity:?}"))
            })?;
            if capacity == 0 {
                return Err(CoreError::Config(format!(
                    "{ENV_HISTORY_CAPACITY} must be at least 1"
                )));
            }
            config.history_capacity = capacity;
        }

        Ok(config)
    }

    /// URL to print for people opening the front end
    pub fn public_url(&self) -> String {
        format!("http://{}", self.bind_addr)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            static_dir: PathBuf::from("."),
            history_capacity: DEFAULT_CAPACITY,
        }
    }
}
