//! HTTP transport
//!
//! axum handles sockets and HTTP framing. Every request, whatever its path,
//! goes through one fallback handler that hands it to the core router.
//! Request bodies are read up to [`MAX_REQUEST_BODY`] bytes and the rest is
//! dropped, so an oversized request still gets a JSON envelope.

use axum::body::Body;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use futures_util::StreamExt;

use stackbrowser_core::{Config, HttpRequest, HttpResponse};

use crate::state::AppState;

/// Bytes of request body handed to the router; anything beyond is ignored
pub const MAX_REQUEST_BODY: usize = 8192;

pub fn app(state: AppState) -> Router {
    Router::new().fallback(handle).with_state(state)
}

pub async fn serve(config: &Config, state: AppState) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}

async fn handle(State(state): State<AppState>, method: Method, uri: Uri, body: Body) -> Response {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());

    tracing::info!(method = %method, path = %path, "Request");

    let body = read_body(body).await;
    let request = HttpRequest::new(
        method.as_str(),
        path,
        String::from_utf8_lossy(&body).into_owned(),
    );

    into_response(state.handle(&request))
}

async fn read_body(body: Body) -> Vec<u8> {
    let mut stream = body.into_data_stream();
    let mut buf = Vec::new();

    while let Some(chunk) = stream.next().await {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(e) => {
                tracing::warn!(error = %e, read = buf.len(), "Request body ended early");
                break;
            }
        };

        let room = MAX_REQUEST_BODY - buf.len();
        if chunk.len() > room {
            buf.extend_from_slice(&chunk[..room]);
            tracing::warn!(limit = MAX_REQUEST_BODY, "Request body truncated");
            break;
        }
        buf.extend_from_slice(&chunk);
    }

    buf
}

fn into_response(response: HttpResponse) -> Response {
    let mut builder = Response::builder().status(response.status);
    for (name, value) in &response.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    builder.body(Body::from(response.body)).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Failed to build HTTP response");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use serde_json::Value;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_app() -> Router {
        let mut assets: HashMap<String, Vec<u8>> = HashMap::new();
        assets.insert("index.html".to_string(), b"<html>home</html>".to_vec());
        app(AppState::new(&Config::default(), Arc::new(assets)))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: &str) -> Response {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::from(body.to_string()))
            .unwrap();
        app.clone().oneshot(request).await.unwrap()
    }

    async fn json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn navigate_body(n: usize) -> String {
        format!(r#"{{"url":"https://site{n}.com","title":"Site {n}"}}"#)
    }

    #[tokio::test]
    async fn test_navigate_back_forward_over_http() {
        let app = test_app();

        let response = send(&app, "POST", "/api/navigate", r#"{"url":"https://a.com","title":"A"}"#).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], "application/json");
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
        let body = json(response).await;
        assert_eq!(body["message"], "Navigated successfully");

        send(&app, "POST", "/api/navigate", r#"{"url":"https://b.com","title":"B"}"#).await;

        let body = json(send(&app, "POST", "/api/back", "").await).await;
        assert_eq!(body["currentPage"]["url"], "https://a.com");
        assert_eq!(body["forwardStack"][0]["url"], "https://b.com");

        let body = json(send(&app, "POST", "/api/forward", "").await).await;
        assert_eq!(body["currentPage"]["url"], "https://b.com");
        assert_eq!(body["forwardCount"], 0);
    }

    #[tokio::test]
    async fn test_errors_are_envelopes_with_ok_status() {
        let app = test_app();

        let response = send(&app, "POST", "/api/back", "").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json(response).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Cannot go back");

        let body = json(send(&app, "GET", "/nowhere", "").await).await;
        assert_eq!(body["message"], "Not found");
    }

    #[tokio::test]
    async fn test_preflight() {
        let app = test_app();

        let response = send(&app, "OPTIONS", "/api/navigate", "").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["access-control-allow-methods"],
            "GET, POST, OPTIONS"
        );
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn test_serves_index() {
        let app = test_app();

        let response = send(&app, "GET", "/", "").await;
        assert_eq!(response.headers()["content-type"], "text/html");
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"<html>home</html>");
    }

    #[tokio::test]
    async fn test_oversized_body_truncated_and_routed() {
        let app = test_app();
        let padding = "x".repeat(3 * 1024 * 1024);
        let body = format!(r#"{{"url":"https://a.com","title":"A","notes":"{padding}"}}"#);

        let response = send(&app, "POST", "/api/navigate", &body).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], "application/json");
        assert_eq!(response.headers()["access-control-allow-origin"], "*");

        let body = json(response).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["currentPage"]["url"], "https://a.com");
    }

    #[tokio::test]
    async fn test_fields_past_body_limit_are_lost() {
        let app = test_app();
        let padding = "x".repeat(MAX_REQUEST_BODY);
        let body = format!(r#"{{"notes":"{padding}","url":"https://a.com","title":"A"}}"#);

        let body = json(send(&app, "POST", "/api/navigate", &body).await).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Invalid URL or title");
    }

    #[tokio::test]
    async fn test_concurrent_navigations_are_serialized() {
        let app = test_app();
        let count = 20;

        let mut tasks = Vec::new();
        for n in 0..count {
            let app = app.clone();
            tasks.push(tokio::spawn(async move {
                send(&app, "POST", "/api/navigate", &navigate_body(n)).await
            }));
        }
        for task in tasks {
            let body = json(task.await.unwrap()).await;
            assert_eq!(body["status"], "success");
        }

        let body = json(send(&app, "GET", "/api/status", "").await).await;
        assert_eq!(body["backCount"], count - 1);
        assert_eq!(body["backStack"].as_array().unwrap().len(), count - 1);
        assert_eq!(body["forwardCount"], 0);
    }
}
