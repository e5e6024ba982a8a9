//! Functional tests for the health aggregation endpoint

use axum::http::StatusCode;
use serde_json::json;
use std::time::Duration;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::support::{get_request, refused_base_url, response_json, test_app, test_settings};

#[tokio::test]
async fn health_embeds_downstream_payload() {
    let server = MockServer::start().await;
    let downstream = json!({
        "status": "healthy",
        "message": "ML API is running",
        "all_models_loaded": true
    });

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&downstream))
        .mount(&server)
        .await;

    let app = test_app(test_settings(&server.uri()));
    let response = app.oneshot(get_request("/api/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["backend"], "healthy");
    assert_eq!(body["flask"], downstream);
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn health_reports_unreachable_downstream_as_unavailable() {
    let app = test_app(test_settings(&refused_base_url()));
    let response = app.oneshot(get_request("/api/health")).await.unwrap();

    // Downstream being down is a reported fact, never an error here
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["backend"], "healthy");
    assert_eq!(body["flask"], "unavailable");
    assert!(body["error"].as_str().unwrap().contains("Cannot connect"));
}

#[tokio::test]
async fn health_reports_slow_downstream_as_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "status": "healthy" }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let mut settings = test_settings(&server.uri());
    settings.ml_service.health_timeout_ms = 100;

    let app = test_app(settings);
    let response = app.oneshot(get_request("/api/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["backend"], "healthy");
    assert_eq!(body["flask"], "unavailable");
    assert!(body["error"].as_str().unwrap().contains("timed out"));
}

#[tokio::test]
async fn health_reports_downstream_error_status_as_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "error": "models missing" })))
        .mount(&server)
        .await;

    let app = test_app(test_settings(&server.uri()));
    let response = app.oneshot(get_request("/api/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["flask"], "unavailable");
    assert!(body["error"].as_str().unwrap().contains("500"));
}
