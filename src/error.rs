//! Common error types for the farm gateway

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::ml::Capability;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The ML service answered with a non-success status. Status and body
    /// are relayed to the caller untouched.
    #[error("ML service returned {status} for {capability}")]
    Downstream {
        capability: Capability,
        status: u16,
        body: Value,
    },

    #[error("Cannot connect to ML service. Make sure it is running at {base_url}")]
    ConnectionRefused { base_url: String },

    #[error("{capability} request to ML service timed out after {timeout_ms}ms")]
    Timeout {
        capability: Capability,
        timeout_ms: u64,
    },

    #[error("{message}")]
    Transport {
        capability: Capability,
        message: String,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            GatewayError::Downstream { status, body, .. } => (
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                body.clone(),
            ),
            GatewayError::ConnectionRefused { .. } => (
                StatusCode::SERVICE_UNAVAILABLE,
                json!({ "error": self.to_string() }),
            ),
            GatewayError::Timeout { capability, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": format!("Failed to get {} prediction", capability),
                    "details": self.to_string(),
                }),
            ),
            GatewayError::Transport {
                capability,
                message,
            } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": format!("Failed to get {} prediction", capability),
                    "details": message,
                }),
            ),
            GatewayError::Config(_) | GatewayError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": self.to_string() }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, GatewayError>;
