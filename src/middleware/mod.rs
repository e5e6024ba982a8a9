//! Inbound request policy layers

pub mod auth;
pub mod rate_limit;
