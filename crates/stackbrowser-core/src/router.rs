//! Request routing
//!
//! Paths are matched by substring, case-sensitively, first match wins:
//! ```text
//! /api/* + OPTIONS  -> CORS preflight
//! /api/navigate     -> navigate_to(url, title)
//! /api/back         -> go_back
//! /api/forward      -> go_forward
//! /api/status       -> read only
//! /api/reset        -> reset
//! /, /index.html, /styles.css, /script.js -> static assets
//! anything else     -> "Not found"
//! ```

use std::sync::Arc;

use stackbrowser_navigation::NavigationEngine;

use crate::assets::StaticAssets;
use crate::body::extract_field;
use crate::envelope::Envelope;
use crate::http::{HttpRequest, HttpResponse};

const INDEX_FALLBACK: &str = "<html><body><h1>File not found</h1></body></html>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Asset {
    file: &'static str,
    content_type: &'static str,
    /// Served when the file is missing
    fallback: &'static str,
}

const INDEX: Asset = Asset {
    file: "index.html",
    content_type: "text/html",
    fallback: INDEX_FALLBACK,
};
const STYLES: Asset = Asset {
    file: "styles.css",
    content_type: "text/css",
    fallback: "",
};
const SCRIPT: Asset = Asset {
    file: "script.js",
    content_type: "application/javascript",
    fallback: "",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    Preflight,
    Navigate,
    Back,
    Forward,
    Status,
    Reset,
    Asset(Asset),
    NotFound,
}

impl Route {
    fn resolve(request: &HttpRequest) -> Self {
        let path = request.path.as_str();

        if path.contains("/api/") && request.is_preflight() {
            Route::Preflight
        } else if path.contains("/api/navigate") {
            Route::Navigate
        } else if path.contains("/api/back") {
            Route::Back
        } else if path.contains("/api/forward") {
            Route::Forward
        } else if path.contains("/api/status") {
            Route::Status
        } else if path.contains("/api/reset") {
            Route::Reset
        } else if path.contains("/index.html") || path == "/" {
            Route::Asset(INDEX)
        } else if path.contains("/styles.css") {
            Route::Asset(STYLES)
        } else if path.contains("/script.js") {
            Route::Asset(SCRIPT)
        } else {
            Route::NotFound
        }
    }
}

/// Maps requests onto navigation engine transitions.
///
/// The router holds no navigation state; the caller passes the engine in
/// and must hold it exclusively for the whole call.
#[derive(Clone)]
pub struct RequestRouter {
    assets: Arc<dyn StaticAssets>,
}

impl RequestRouter {
    pub fn new(assets: Arc<dyn StaticAssets>) -> Self {
        Self { assets }
    }

    pub fn handle(&self, engine: &mut NavigationEngine, request: &HttpRequest) -> HttpResponse {
        let route = Route::resolve(request);

        let envelope = match route {
            Route::Preflight => return HttpResponse::json(""),
            Route::Asset(asset) => return self.serve_asset(asset),
            Route::Navigate => Self::navigate(engine, &request.body),
            Route::Back => {
                if engine.go_back() {
                    Envelope::success("Went back", engine.view())
                } else {
                    Envelope::error("Cannot go back")
                }
            }
            Route::Forward => {
                if engine.go_forward() {
                    Envelope::success("Went forward", engine.view())
                } else {
                    Envelope::error("Cannot go forward")
                }
            }
            Route::Status => Envelope::success("Status retrieved", engine.view()),
            Route::Reset => {
                engine.reset();
                Envelope::success("Browser reset successfully", engine.view())
            }
            Route::NotFound => Envelope::error("Not found"),
        };

        if !envelope.is_success() {
            tracing::info!(route = ?route, message = %envelope.message, "Request refused");
        } else if let Some(state) = envelope.state.as_ref() {
            tracing::debug!("Navigation state after {:?}:\n{}", route, state);
        }

        HttpResponse::json(envelope.to_json())
    }

    fn navigate(engine: &mut NavigationEngine, body: &str) -> Envelope {
        let url = extract_field(body, "url");
        let title = extract_field(body, "title");

        if url.is_empty() || title.is_empty() {
            tracing::warn!(body_len = body.len(), "Rejected navigation without url or title");
            return Envelope::error("Invalid URL or title");
        }

        engine.navigate_to(&url, &title);
        Envelope::success("Navigated successfully", engine.view())
    }

    fn serve_asset(&self, asset: Asset) -> HttpResponse {
        match self.assets.load(asset.file) {
            Some(contents) => HttpResponse::asset(asset.content_type, contents),
            None => {
                tracing::warn!(file = asset.file, "Static asset missing, serving fallback");
                HttpResponse::asset(asset.content_type, asset.fallback.as_bytes().to_vec())
            }
        }
    }
}
