//! Logging configuration

use super::authz::env_var;
use super::*;
use serde::{Deserialize, Serialize};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl LoggingConfig {
    pub fn from_env() -> crate::utils::error::Result<Self> {
        let mut config = Self::default();
        if let Some(level) = env_var("AUTHZ_LOG_LEVEL")? {
            config.level = level;
        }
        if let Some(json) = env_var("AUTHZ_LOG_JSON")? {
            config.json = json;
        }
        Ok(config)
    }

    pub fn merge(mut self, other: Self) -> Self {
        if other.level != default_log_level() {
            self.level = other.level;
        }
        if other.json {
            self.json = other.json;
        }
        self
    }
}
