//! Prediction capabilities offered by the downstream ML service

use serde::{Deserialize, Serialize};
use std::fmt;

/// A capability of the downstream ML service, keyed to its endpoint path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    Fertility,
    Irrigation,
    Health,
}

impl Capability {
    /// Path of this capability on the downstream service
    pub fn path(&self) -> &'static str {
        match self {
            Capability::Fertility => "/predict/fertility",
            Capability::Irrigation => "/predict/irrigation",
            Capability::Health => "/health",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Fertility => "fertility",
            Capability::Irrigation => "irrigation",
            Capability::Health => "health",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
