//! Storage collaborators for the authorization core
//!
//! Both backends implement [`ProjectManager`] and [`MemberStore`]. The core only
//! ever sees the trait objects held by [`StorageLayer`].

/// Database storage module
pub mod database;
/// In-memory storage module
pub mod memory;

use crate::auth::security::SecurityContext;
use crate::config::StorageConfig;
use crate::core::models::User;
use crate::core::traits::{MemberStore, ProjectManager};
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{debug, info};

/// Collaborator handles shared by every security context of a process
#[derive(Clone)]
pub struct StorageLayer {
    /// Project lookups
    pub project_manager: Arc<dyn ProjectManager>,
    /// Membership lookups
    pub members: Arc<dyn MemberStore>,
    /// Database handle when the relational backend is in use
    pub database: Option<Arc<database::Database>>,
}

impl std::fmt::Debug for StorageLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageLayer")
            .field("database", &self.database.is_some())
            .finish_non_exhaustive()
    }
}

impl StorageLayer {
    /// Create the storage layer for the configured backend
    pub async fn new(config: &StorageConfig) -> Result<Self> {
        info!("Initializing storage layer");

        if config.database.enabled {
            debug!("Connecting to database");
            let database = Arc::new(database::Database::new(&config.database).await?);
            if config.run_migrations {
                database.migrate().await?;
            }
            Ok(Self::from_database(database))
        } else {
            debug!("Database disabled, using in-memory storage");
            Ok(Self::from_memory(Arc::new(memory::InMemoryStore::new())))
        }
    }

    /// Wrap a relational backend
    pub fn from_database(database: Arc<database::Database>) -> Self {
        Self {
            project_manager: database.clone(),
            members: database.clone(),
            database: Some(database),
        }
    }

    /// Wrap an in-memory backend
    pub fn from_memory(store: Arc<memory::InMemoryStore>) -> Self {
        Self {
            project_manager: store.clone(),
            members: store,
            database: None,
        }
    }

    /// Build a security context for one request
    pub fn security_context(&self, user: Option<User>) -> SecurityContext {
        SecurityContext::new(user, self.project_manager.clone(), self.members.clone())
    }

    /// Health check for the configured backend
    pub async fn health_check(&self) -> Result<()> {
        match &self.database {
            Some(database) => database.health_check().await,
            None => Ok(()),
        }
    }
}
