//! Shared helpers for API integration tests.
//!
//! Builds the real application router (same middleware stack as
//! production via [`build_app_router`]) on top of test state: fallback-only
//! content, zero submit delay, and a recording link opener so tests can
//! assert on WhatsApp handoffs.

use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use estudio12_api::config::ServerConfig;
use estudio12_api::router::build_app_router;
use estudio12_api::sessions::SessionStore;
use estudio12_api::state::{AppState, Dictionaries};
use estudio12_content::ContentProvider;
use estudio12_core::whatsapp::LinkOpener;

/// Opener that records every handed-off URL for assertions.
#[derive(Default)]
pub struct RecordingOpener {
    urls: Mutex<Vec<String>>,
}

impl RecordingOpener {
    pub fn handoffs(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

impl LinkOpener for RecordingOpener {
    fn open(&self, url: &str) {
        self.urls.lock().unwrap().push(url.to_string());
    }
}

/// Build a test `ServerConfig` with safe defaults and no submit delay.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        submit_delay_ms: 0,
        prismic_api_url: None,
    }
}

/// Build the full application router plus a handle to the recording
/// opener.
pub fn build_test_app() -> (Router, Arc<RecordingOpener>) {
    let config = test_config();
    let opener = Arc::new(RecordingOpener::default());

    let state = AppState {
        config: Arc::new(config.clone()),
        dictionaries: Arc::new(Dictionaries::load().unwrap()),
        content: Arc::new(ContentProvider::fallback_only()),
        sessions: Arc::new(SessionStore::new()),
        opener: Arc::clone(&opener) as Arc<dyn LinkOpener>,
    };

    (build_app_router(state, &config), opener)
}

/// Send a request through the router.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Option<Value>) -> Response {
    send(app, Method::POST, uri, body).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> Response {
    send(app, Method::PUT, uri, Some(body)).await
}

/// Read a response body as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Expect a status and return the parsed body.
pub async fn expect_json(response: Response, status: StatusCode) -> Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}
