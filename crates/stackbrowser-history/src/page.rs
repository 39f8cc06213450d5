//! Page entries

use serde::{Deserialize, Serialize};

/// Longest url or title retained, in characters. Anything beyond is dropped.
pub const MAX_FIELD_LENGTH: usize = 255;

/// Placeholder page shown before the first navigation and after a reset.
pub const BLANK_URL: &str = "about:blank";
pub const BLANK_TITLE: &str = "New Tab";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEntry {
    pub title: String,
    pub url: String,
}

impl PageEntry {
    /// Build an entry, silently truncating both fields to [`MAX_FIELD_LENGTH`].
    pub fn new(url: &str, title: &str) -> Self {
        Self {
            title: clamp(title),
            url: clamp(url),
        }
    }

    pub fn blank() -> Self {
        Self::new(BLANK_URL, BLANK_TITLE)
    }

    /// True for the placeholder page. Only the url is compared.
    pub fn is_blank(&self) -> bool {
        self.url == BLANK_URL
    }
}

impl Default for PageEntry {
    fn default() -> Self {
        Self::blank()
    }
}

fn clamp(value: &str) -> String {
    match value.char_indices().nth(MAX_FIELD_LENGTH) {
        Some((end, _)) => value[..end].to_string(),
        None => value.to_string(),
    }
}
