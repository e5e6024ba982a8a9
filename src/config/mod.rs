//! Configuration module

pub mod settings;

pub use settings::{
    AuthConfig, LoggingConfig, MlServiceConfig, RateLimitConfig, ServerConfig, Settings,
};
