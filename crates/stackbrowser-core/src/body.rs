//! Request body field extraction
//!
//! Deliberately minimal: the body is scanned for the literal `"<key>":"` and
//! the value runs up to the next `"`. Escapes, whitespace around the colon,
//! nested objects and non-string values are not understood. The paired front
//! end sends compact `JSON.stringify` output, which this matches.

use stackbrowser_history::MAX_FIELD_LENGTH;

/// Extract a string field from a flat JSON object body.
///
/// Returns an empty string when the key is absent. Values are capped at
/// [`MAX_FIELD_LENGTH`] characters.
pub fn extract_field(body: &str, key: &str) -> String {
    let needle = format!("\"{key}\":\"");

    let Some(start) = body.find(&needle) else {
        return String::new();
    };

    body[start + needle.len()..]
        .chars()
        .take_while(|&c| c != '"')
        .take(MAX_FIELD_LENGTH)
        .collect()
}
