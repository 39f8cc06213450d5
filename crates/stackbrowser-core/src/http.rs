//! Transport-neutral request and response types
//!
//! The server binary converts between these and its HTTP library's types.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: String,
    /// Request target as sent, including any query string
    pub path: String,
    pub body: String,
}

impl HttpRequest {
    pub fn new(method: impl Into<String>, path: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            body: body.into(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new("GET", path, "")
    }

    pub fn post(path: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new("POST", path, body)
    }

    pub fn is_preflight(&self) -> bool {
        self.method == "OPTIONS"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// JSON API response with permissive CORS headers
    pub fn json(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            headers: vec![
                header("Content-Type", "application/json"),
                header("Access-Control-Allow-Origin", "*"),
                header("Access-Control-Allow-Methods", "GET, POST, OPTIONS"),
                header("Access-Control-Allow-Headers", "Content-Type"),
                header("Connection", "close"),
            ],
            body: body.into().into_bytes(),
        }
    }

    /// Static asset response
    pub fn asset(content_type: &str, body: Vec<u8>) -> Self {
        Self {
            status: 200,
            headers: vec![
                header("Content-Type", content_type),
                header("Connection", "close"),
            ],
            body,
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    #[cfg(test)]
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

fn header(name: &str, value: &str) -> (String, String) {
    (name.to_string(), value.to_string())
}
