//! Configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;

impl Validate for AuthzConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating authorization configuration");

        self.storage.validate()?;
        self.logging.validate()?;

        Ok(())
    }
}

impl Validate for StorageConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating storage configuration");

        if self.database.enabled {
            self.database.validate()?;
        }

        Ok(())
    }
}

impl Validate for DatabaseConfig {
    fn validate(&self) -> Result<(), String> {
        if self.url.is_empty() {
            return Err("Database URL cannot be empty".to_string());
        }

        let supported = ["postgresql://", "postgres://", "sqlite:"];
        if !supported.iter().any(|scheme| self.url.starts_with(scheme)) {
            return Err("Only PostgreSQL and SQLite databases are supported".to_string());
        }

        if self.max_connections == 0 {
            return Err("Database max connections must be greater than 0".to_string());
        }

        if self.max_connections > 1000 {
            return Err("Database max connections should not exceed 1000".to_string());
        }

        if self.connection_timeout == 0 {
            return Err("Database connection timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }

        tracing_subscriber::EnvFilter::try_new(&self.level)
            .map(|_| ())
            .map_err(|e| format!("Invalid log level '{}': {}", self.level, e))
    }
}
