//! JSON response envelope

use serde::{Deserialize, Serialize};

use stackbrowser_navigation::StateView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// `{status, message}` plus the flattened state view on success paths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub status: Status,
    pub message: String,
    #[serde(flatten)]
    pub state: Option<StateView>,
}

impl Envelope {
    pub fn success(message: impl Into<String>, state: StateView) -> Self {
        Self {
            status: Status::Success,
            message: message.into(),
            state: Some(state),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: message.into(),
            state: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    pub fn to_json(&self) -> String {
        // Only strings, integers and nested structs; serialization cannot fail
        serde_json::to_string(self).unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to serialize response envelope");
            r#"{"status":"error","message":"Internal error"}"#.to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use stackbrowser_navigation::NavigationEngine;

    #[test]
    fn test_error_envelope_has_no_state() {
        let json = Envelope::error("Cannot go back").to_json();
        assert_eq!(json, r#"{"status":"error","message":"Cannot go back"}"#);
    }

    #[test]
    fn test_success_envelope_flattens_state() {
        let mut engine = NavigationEngine::new();
        engine.navigate_to("https://a.com", "A");

        let json = Envelope::success("Navigated successfully", engine.view()).to_json();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["status"], "success");
        assert_eq!(value["message"], "Navigated successfully");
        assert_eq!(value["currentPage"]["url"], "https://a.com");
        assert_eq!(value["backCount"], 0);
        assert_eq!(value["forwardCount"], 0);
        assert!(value["backStack"].is_array());
        assert!(value["forwardStack"].is_array());
    }

    #[test]
    fn test_parses_back_into_envelope() {
        let engine = NavigationEngine::new();
        let original = Envelope::success("Status retrieved", engine.view());
        let parsed: Envelope = serde_json::from_str(&original.to_json()).unwrap();
        assert_eq!(parsed, original);

        let parsed: Envelope =
            serde_json::from_str(r#"{"status":"error","message":"Not found"}"#).unwrap();
        assert!(!parsed.is_success());
        assert_eq!(parsed.state, None);
    }

    #[test]
    fn test_special_characters_escaped() {
        let mut engine = NavigationEngine::new();
        engine.navigate_to("https://a.com/?q=\"x\"", "Tab\there");

        let json = Envelope::success("ok", engine.view()).to_json();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["currentPage"]["url"], "https://a.com/?q=\"x\"");
        assert_eq!(value["currentPage"]["title"], "Tab\there");
    }
}
