//! HTTP client for the external ML prediction service

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::MlServiceConfig;
use crate::error::{GatewayError, Result};
use crate::ml::Capability;

/// Client for the downstream prediction service.
///
/// A pure transport and error-classification boundary: payloads go out
/// verbatim, response bodies come back verbatim, and the only added value is
/// per-capability timeouts and a structured failure taxonomy. One attempt per
/// call, no retries.
pub struct PredictionClient {
    http: Client,
    base_url: String,
    irrigation_timeout: Duration,
    health_timeout: Duration,
    fertility_timeout: Option<Duration>,
}

impl PredictionClient {
    /// Create a new client from the ML service configuration
    pub fn new(config: &MlServiceConfig) -> Result<Self> {
        let http = Client::builder()
            .build()
            .map_err(|e| GatewayError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            irrigation_timeout: Duration::from_millis(config.irrigation_timeout_ms),
            health_timeout: Duration::from_millis(config.health_timeout_ms),
            fertility_timeout: config.fertility_timeout_ms.map(Duration::from_millis),
        })
    }

    fn timeout_for(&self, capability: Capability) -> Option<Duration> {
        match capability {
            Capability::Fertility => self.fertility_timeout,
            Capability::Irrigation => Some(self.irrigation_timeout),
            Capability::Health => Some(self.health_timeout),
        }
    }

    /// Forward a prediction payload to the downstream service under the
    /// configured per-capability timeout.
    pub async fn predict(&self, capability: Capability, payload: Value) -> Result<Value> {
        self.predict_with_timeout(capability, payload, None).await
    }

    /// Forward a prediction payload, optionally overriding the configured
    /// timeout for this call.
    ///
    /// The payload is sent as JSON without inspection; on success the decoded
    /// response body is returned unmodified.
    pub async fn predict_with_timeout(
        &self,
        capability: Capability,
        payload: Value,
        timeout_override: Option<Duration>,
    ) -> Result<Value> {
        let url = format!("{}{}", self.base_url, capability.path());
        let timeout = timeout_override.or_else(|| self.timeout_for(capability));
        let request_id = Uuid::new_v4();

        debug!(%request_id, %capability, url = %url, "Forwarding prediction request");

        let mut request = self.http.post(&url).json(&payload);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        match request.send().await {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    let body = response.json::<Value>().await.map_err(|e| {
                        GatewayError::Transport {
                            capability,
                            message: format!("Failed to decode ML service response: {}", e),
                        }
                    })?;
                    debug!(%request_id, %capability, "Prediction succeeded");
                    Ok(body)
                } else {
                    let status = status.as_u16();
                    let text = response.text().await.unwrap_or_default();
                    let body =
                        serde_json::from_str(&text).unwrap_or(Value::String(text));
                    warn!(%request_id, %capability, status, "ML service returned an error");
                    Err(GatewayError::Downstream {
                        capability,
                        status,
                        body,
                    })
                }
            }
            Err(e) => Err(self.classify(capability, timeout, e)),
        }
    }

    /// Probe the downstream health endpoint under the short timeout
    pub async fn health(&self) -> Result<Value> {
        let url = format!("{}{}", self.base_url, Capability::Health.path());

        match self.http.get(&url).timeout(self.health_timeout).send().await {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    response
                        .json::<Value>()
                        .await
                        .map_err(|e| GatewayError::Transport {
                            capability: Capability::Health,
                            message: format!("Failed to decode health response: {}", e),
                        })
                } else {
                    let status = status.as_u16();
                    let text = response.text().await.unwrap_or_default();
                    let body =
                        serde_json::from_str(&text).unwrap_or(Value::String(text));
                    Err(GatewayError::Downstream {
                        capability: Capability::Health,
                        status,
                        body,
                    })
                }
            }
            Err(e) => Err(self.classify(Capability::Health, Some(self.health_timeout), e)),
        }
    }

    /// Sort a transport failure into the gateway error taxonomy
    fn classify(
        &self,
        capability: Capability,
        timeout: Option<Duration>,
        error: reqwest::Error,
    ) -> GatewayError {
        if error.is_timeout() {
            let timeout_ms = timeout.map(|t| t.as_millis() as u64).unwrap_or_default();
            warn!(%capability, timeout_ms, "ML service call timed out");
            GatewayError::Timeout {
                capability,
                timeout_ms,
            }
        } else if error.is_connect() {
            warn!(%capability, base_url = %self.base_url, "Cannot connect to ML service");
            GatewayError::ConnectionRefused {
                base_url: self.base_url.clone(),
            }
        } else {
            warn!(%capability, error = %error, "ML service call failed");
            GatewayError::Transport {
                capability,
                message: error.to_string(),
            }
        }
    }
}
