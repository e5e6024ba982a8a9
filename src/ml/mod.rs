//! Outbound integration with the external ML prediction service

pub mod capability;
pub mod client;

pub use capability::Capability;
pub use client::PredictionClient;
