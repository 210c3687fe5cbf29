use crate::config::DatabaseConfig;
use crate::utils::error::{AuthzError, Result};
use sea_orm::*;
use sea_orm_migration::MigratorTrait;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::super::entities::{self, project};
use super::super::migration::Migrator;
use super::types::{DatabaseBackendType, DatabaseStats, SeaOrmDatabase};

impl SeaOrmDatabase {
    /// Create a new database connection
    ///
    /// Connection failures are returned as is; no fallback backend is tried.
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let backend_type = if config.url.starts_with("sqlite") {
            DatabaseBackendType::SQLite
        } else if config.url.starts_with("postgresql://") || config.url.starts_with("postgres://")
        {
            DatabaseBackendType::PostgreSQL
        } else {
            return Err(AuthzError::config(format!(
                "Unsupported database URL scheme: {}",
                config.url
            )));
        };

        let db = Self::try_connect(&config.url, config).await.inspect_err(|e| {
            warn!("Database connection failed: {}", e);
        })?;

        info!("Database connection established ({:?})", backend_type);
        Ok(Self { db, backend_type })
    }

    /// Try to connect to a database
    async fn try_connect(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url.to_string());
        opt.max_connections(config.max_connections)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.connection_timeout))
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(3600))
            .sqlx_logging(true)
            .sqlx_logging_level(log::LevelFilter::Debug);

        Database::connect(opt).await.map_err(AuthzError::Database)
    }

    /// Get the current backend type
    pub fn backend_type(&self) -> DatabaseBackendType {
        self.backend_type
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        info!("Running database migrations...");
        Migrator::up(&self.db, None).await.map_err(|e| {
            warn!("Migration failed: {}", e);
            AuthzError::Database(e)
        })?;
        info!("Database migrations completed successfully");
        Ok(())
    }

    /// Get the underlying database connection
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Close the database connection
    pub async fn close(self) -> Result<()> {
        self.db.close().await.map_err(AuthzError::Database)?;
        Ok(())
    }

    /// Health check
    pub async fn health_check(&self) -> Result<()> {
        debug!("Performing database health check");

        let _result = entities::Project::find()
            .limit(1)
            .all(&self.db)
            .await
            .map_err(AuthzError::Database)?;

        debug!("Database health check passed");
        Ok(())
    }

    /// Row counts
    pub async fn stats(&self) -> Result<DatabaseStats> {
        let projects = entities::Project::find()
            .filter(project::Column::Deleted.eq(false))
            .count(&self.db)
            .await
            .map_err(AuthzError::Database)?;
        let members = entities::ProjectMember::find()
            .count(&self.db)
            .await
            .map_err(AuthzError::Database)?;

        Ok(DatabaseStats { projects, members })
    }
}
