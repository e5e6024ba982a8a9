//! Prediction proxy handlers
//!
//! One handler per capability. Each forwards the inbound body to the ML
//! service unchanged and relays the response, success or failure. No field
//! validation happens here; the ML service owns its own input contract and
//! its 4xx responses are passed back verbatim.

use axum::{extract::State, Json};
use serde_json::Value;
use std::sync::Arc;

use crate::error::Result;
use crate::ml::Capability;
use crate::AppState;

/// `POST /api/crops/fertility` — soil nutrient measurements in, fertility
/// prediction out.
pub async fn predict_fertility(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>> {
    let body = state.client.predict(Capability::Fertility, payload).await?;
    Ok(Json(body))
}

/// `POST /api/crops/moisture` — moisture sensor readings in, irrigation
/// prediction out.
pub async fn predict_moisture(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>> {
    let body = state.client.predict(Capability::Irrigation, payload).await?;
    Ok(Json(body))
}
