//! Application settings and configuration management

use crate::error::{GatewayError, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub ml_service: MlServiceConfig,
    pub auth: AuthConfig,
    pub rate_limit: RateLimitConfig,
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

/// Downstream ML service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MlServiceConfig {
    /// Base URL of the prediction service, no trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_irrigation_timeout")]
    pub irrigation_timeout_ms: u64,
    #[serde(default = "default_health_timeout")]
    pub health_timeout_ms: u64,
    /// Fertility calls carry no deadline unless one is configured
    #[serde(default)]
    pub fertility_timeout_ms: Option<u64>,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_irrigation_timeout() -> u64 {
    10_000
}

fn default_health_timeout() -> u64 {
    3_000
}

/// Authentication configuration
///
/// Prediction routes are open by default; flip `enabled` to require an API
/// key on everything except the health endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub api_keys: Vec<String>,
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RateLimitConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_rps")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst_size: u32,
}

fn default_rps() -> u32 {
    100
}

fn default_burst() -> u32 {
    200
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load settings from configuration files and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path("config/default.toml")
    }

    /// Load settings from a specific configuration file path
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Config::builder()
            // Start with default values
            .set_default("server.host", default_host())?
            .set_default("server.port", default_port())?
            .set_default("ml_service.base_url", default_base_url())?
            .set_default("ml_service.irrigation_timeout_ms", default_irrigation_timeout())?
            .set_default("ml_service.health_timeout_ms", default_health_timeout())?
            .set_default("auth.enabled", false)?
            .set_default("rate_limit.enabled", false)?
            .set_default("rate_limit.requests_per_second", default_rps())?
            .set_default("rate_limit.burst_size", default_burst())?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.format", default_log_format())?
            // Load from configuration file
            .add_source(
                File::with_name(path.as_ref().to_str().unwrap_or("config/default"))
                    .required(false),
            )
            // Override with environment variables (prefixed with FARM_GATEWAY__)
            .add_source(
                Environment::with_prefix("FARM_GATEWAY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(GatewayError::Config(config::ConfigError::Message(
                "Server port cannot be 0".to_string(),
            )));
        }

        if self.ml_service.base_url.is_empty() {
            return Err(GatewayError::Config(config::ConfigError::Message(
                "ML service base_url cannot be empty".to_string(),
            )));
        }

        if self.auth.enabled && self.auth.api_keys.is_empty() {
            return Err(GatewayError::Config(config::ConfigError::Message(
                "Auth is enabled but no API keys are configured".to_string(),
            )));
        }

        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: default_host(),
                port: default_port(),
            },
            ml_service: MlServiceConfig {
                base_url: default_base_url(),
                irrigation_timeout_ms: default_irrigation_timeout(),
                health_timeout_ms: default_health_timeout(),
                fertility_timeout_ms: None,
            },
            auth: AuthConfig {
                enabled: false,
                api_keys: vec![],
            },
            rate_limit: RateLimitConfig {
                enabled: false,
                requests_per_second: default_rps(),
                burst_size: default_burst(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
                format: default_log_format(),
            },
        }
    }
}
