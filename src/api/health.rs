//! Health aggregation endpoint

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use crate::AppState;

/// Composite health payload.
///
/// `flask` carries the downstream ML service's own health report (the key
/// predates this gateway; API clients depend on it). When the service cannot
/// be reached it holds the literal string `"unavailable"` and `error`
/// explains why.
#[derive(Debug, Serialize)]
pub struct ServiceHealth {
    pub backend: &'static str,
    pub flask: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// `GET /api/health` — always 200.
///
/// The gateway reports itself healthy by construction (it answered), and
/// downstream unavailability is a reported fact, not a failure of this
/// endpoint.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<ServiceHealth> {
    match state.client.health().await {
        Ok(payload) => Json(ServiceHealth {
            backend: "healthy",
            flask: payload,
            error: None,
        }),
        Err(e) => {
            debug!(error = %e, "ML service health probe failed");
            Json(ServiceHealth {
                backend: "healthy",
                flask: Value::String("unavailable".to_string()),
                error: Some(e.to_string()),
            })
        }
    }
}
