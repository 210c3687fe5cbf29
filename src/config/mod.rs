//! Configuration management
//!
//! Loading, merging and validation of the crate configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{AuthzError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Authorization configuration
    pub authz: AuthzConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AuthzError::Config(format!("Failed to read config file: {}", e)))?;

        let authz: AuthzConfig = serde_yaml::from_str(&content)
            .map_err(|e| AuthzError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { authz };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables (and a `.env` file if present)
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        if let Ok(path) = dotenvy::dotenv() {
            debug!("Loaded environment from {:?}", path);
        }

        let config = Self {
            authz: AuthzConfig::from_env()?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.authz.storage
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.authz.logging
    }

    /// Get security configuration
    pub fn security(&self) -> &SecurityConfig {
        &self.authz.security
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.authz
            .storage
            .validate()
            .map_err(|e| AuthzError::Config(format!("Storage config error: {}", e)))?;

        self.authz
            .logging
            .validate()
            .map_err(|e| AuthzError::Config(format!("Logging config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.authz = self.authz.merge(other.authz);
        self
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.authz)
            .map_err(|e| AuthzError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
