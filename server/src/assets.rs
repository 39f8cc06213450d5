//! Static files served from a directory on disk

use std::io::ErrorKind;
use std::path::PathBuf;

use stackbrowser_core::StaticAssets;

pub struct DirectoryAssets {
    root: PathBuf,
}

impl DirectoryAssets {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl StaticAssets for DirectoryAssets {
    fn load(&self, name: &str) -> Option<Vec<u8>> {
        let path = self.root.join(name);
        match std::fs::read(&path) {
            Ok(contents) => Some(contents),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Failed to read static asset");
                None
            }
        }
    }
}
