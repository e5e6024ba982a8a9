//! HTTP API surface of the gateway

pub mod health;
pub mod predictions;
pub mod routes;
