//! urlrisk web server
//!
//! Axum-based JSON API exposing the scanner at `POST /api/scan`.

pub mod error;
pub mod routes;
pub mod state;

use axum::{routing::post, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use error::ApiError;
use state::AppState;
use urlrisk_core::Scanner;

/// Address the server binds to.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/scan", post(routes::scan::scan))
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Run the web server.
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let app = create_router(AppState::new(Scanner::default()));

    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    tracing::info!("Server running on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let app = create_router(AppState::default());
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/api/scan")
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap()
    }

    #[tokio::test]
    async fn test_scan_clean_url() {
        let (status, body) = send(post_json(r#"{"url":"https://example.com"}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "url": "https://example.com",
                "score": 0,
                "reasons": [],
                "verdict": "No major flags"
            })
        );
    }

    #[tokio::test]
    async fn test_scan_risky_url() {
        let (status, body) = send(post_json(r#"{"url":"http://example.com/verify"}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 40);
        assert_eq!(
            body["reasons"],
            json!(["Not using HTTPS", "Contains suspicious keywords"])
        );
        assert_eq!(body["verdict"], "Caution");
    }

    #[tokio::test]
    async fn test_missing_url() {
        for payload in ["{}", r#"{"url":null}"#, r#"{"url":""}"#] {
            let (status, body) = send(post_json(payload)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{payload}");
            assert_eq!(body, json!({ "error": "URL is required" }), "{payload}");
        }
    }

    #[tokio::test]
    async fn test_missing_content_type() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/scan")
            .body(Body::from(r#"{"url":"https://example.com"}"#))
            .unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "URL is required" }));
    }

    #[tokio::test]
    async fn test_empty_body() {
        let (status, body) = send(post_json("")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "URL is required" }));

        let (status, body) = send(post_json("[]")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "URL is required" }));
    }

    #[tokio::test]
    async fn test_falsy_url_is_missing() {
        for payload in [r#"{"url":false}"#, r#"{"url":0}"#, r#"{"url":0.0}"#] {
            let (status, body) = send(post_json(payload)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{payload}");
            assert_eq!(body, json!({ "error": "URL is required" }), "{payload}");
        }
    }

    #[tokio::test]
    async fn test_invalid_url() {
        let (status, body) = send(post_json(r#"{"url":"not a url"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Invalid URL format" }));

        for payload in [r#"{"url":42}"#, r#"{"url":true}"#, r#"{"url":{}}"#] {
            let (status, body) = send(post_json(payload)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{payload}");
            assert_eq!(body, json!({ "error": "Invalid URL format" }), "{payload}");
        }
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let (status, body) = send(post_json(r#"{"url":"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Malformed JSON body" }));
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let app = create_router(AppState::default());
        let request = Request::builder()
            .method(Method::GET)
            .uri("/api/scan")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[test]
    fn test_default_config() {
        assert_eq!(ServerConfig::default().addr(), "127.0.0.1:3000");
    }
}
