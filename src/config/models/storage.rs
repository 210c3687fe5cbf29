//! Storage configuration

use super::authz::env_var;
use super::*;
use serde::{Deserialize, Serialize};

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Apply schema migrations when connecting
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            run_migrations: true,
        }
    }
}

impl StorageConfig {
    pub fn from_env() -> crate::utils::error::Result<Self> {
        let mut config = Self {
            database: DatabaseConfig::from_env()?,
            ..Self::default()
        };
        if let Some(run) = env_var("AUTHZ_RUN_MIGRATIONS")? {
            config.run_migrations = run;
        }
        Ok(config)
    }

    /// Merge storage configurations
    pub fn merge(mut self, other: Self) -> Self {
        self.database = self.database.merge(other.database);
        if !other.run_migrations {
            self.run_migrations = other.run_migrations;
        }
        self
    }
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL
    #[serde(default = "default_database_url")]
    pub url: String,
    /// Maximum connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
    /// Enable database (if false, use in-memory storage)
    #[serde(default)]
    pub enabled: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
            connection_timeout: default_connection_timeout(),
            enabled: false,
        }
    }
}

impl DatabaseConfig {
    pub fn from_env() -> crate::utils::error::Result<Self> {
        let mut config = Self::default();
        if let Some(url) = env_var::<String>("AUTHZ_DATABASE_URL")? {
            config.url = url;
            config.enabled = true;
        }
        if let Some(enabled) = env_var("AUTHZ_DATABASE_ENABLED")? {
            config.enabled = enabled;
        }
        if let Some(max) = env_var("AUTHZ_DATABASE_MAX_CONNECTIONS")? {
            config.max_connections = max;
        }
        Ok(config)
    }

    /// Merge database configurations
    pub fn merge(mut self, other: Self) -> Self {
        if !other.url.is_empty() && other.url != default_database_url() {
            self.url = other.url;
        }
        if other.max_connections != default_max_connections() {
            self.max_connections = other.max_connections;
        }
        if other.connection_timeout != default_connection_timeout() {
            self.connection_timeout = other.connection_timeout;
        }
        if other.enabled {
            self.enabled = other.enabled;
        }
        self
    }
}
