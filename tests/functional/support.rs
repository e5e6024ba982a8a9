//! Shared helpers for functional tests

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Request},
    response::Response,
    Router,
};
use farm_gateway::{api::routes::create_router, config::Settings, AppState};
use serde_json::Value;
use std::sync::Arc;

/// Settings pointing at a test downstream, everything else default
pub fn test_settings(base_url: &str) -> Settings {
    let mut settings = Settings::default();
    settings.ml_service.base_url = base_url.to_string();
    settings
}

/// Build the real application router over the given settings
pub fn test_app(settings: Settings) -> Router {
    let state = Arc::new(AppState::new(settings).expect("state should build"));
    create_router(state)
}

/// A POST request with a JSON body
pub fn json_request(uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(payload).unwrap()))
        .unwrap()
}

/// A bodyless GET request
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Decode a response body as JSON
pub async fn response_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Base URL of a port that nothing is listening on
pub fn refused_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
