//! Static front-end assets

use std::collections::HashMap;

/// Source of the front end's static files. Implementations own all file I/O.
pub trait StaticAssets: Send + Sync {
    /// Contents of the named asset, or `None` if it does not exist
    fn load(&self, name: &str) -> Option<Vec<u8>>;
}

/// In-memory asset table, keyed by file name
impl StaticAssets for HashMap<String, Vec<u8>> {
    fn load(&self, name: &str) -> Option<Vec<u8>> {
        self.get(name).cloned()
    }
}
