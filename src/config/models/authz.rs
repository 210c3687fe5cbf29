//! Top-level authorization configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AuthzConfig {
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Security decision configuration
    #[serde(default)]
    pub security: SecurityConfig,
}

impl AuthzConfig {
    /// Build configuration from `AUTHZ_*` environment variables over defaults
    pub fn from_env() -> crate::utils::error::Result<Self> {
        Ok(Self {
            storage: StorageConfig::from_env()?,
            logging: LoggingConfig::from_env()?,
            security: SecurityConfig::from_env()?,
        })
    }

    /// Merge two configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        self.storage = self.storage.merge(other.storage);
        self.logging = self.logging.merge(other.logging);
        self.security = self.security.merge(other.security);
        self
    }
}

/// Read and parse an optional environment variable
pub(crate) fn env_var<T: std::str::FromStr>(name: &str) -> crate::utils::error::Result<Option<T>>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw.trim().parse::<T>().map(Some).map_err(|e| {
            crate::utils::error::AuthzError::config(format!("Invalid value for {}: {}", name, e))
        }),
        Err(_) => Ok(None),
    }
}
