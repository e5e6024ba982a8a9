//! Farm Prediction Gateway
//!
//! A thin backend for the farm-management app: it exposes the crop
//! prediction endpoints to browser clients and proxies them to the external
//! ML service, translating transport failures into structured JSON errors.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod ml;

pub use error::{GatewayError, Result};

use ml::PredictionClient;

/// Application state shared across all handlers.
///
/// Settings are loaded once at startup and never mutated; every handler sees
/// the same immutable configuration.
pub struct AppState {
    pub settings: config::Settings,
    pub client: PredictionClient,
}

impl AppState {
    pub fn new(settings: config::Settings) -> Result<Self> {
        let client = PredictionClient::new(&settings.ml_service)?;
        Ok(Self { settings, client })
    }
}
