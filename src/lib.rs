//! # registry-authz
//!
//! Project-scoped access control for a multi-tenant artifact registry.
//!
//! Given a principal (or none, for anonymous requests) and a project, the crate
//! decides whether the principal may read, write, or administer the project.
//! Decisions combine direct membership, group-derived membership, project
//! visibility and the system-administrator override.
//!
//! ## Features
//!
//! - **Typed roles**: guest, developer, project admin and system admin with an
//!   explicit privilege order
//! - **Max-permission rule**: several roles on one project never subtract privilege
//! - **Pluggable storage**: SeaORM (SQLite/PostgreSQL) or in-memory collaborators
//! - **Distinguishable failures**: storage errors are never reported as "denied"
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use registry_authz::{Authz, Config, User};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/authz.yaml").await?;
//!     let authz = Authz::new(config).await?;
//!
//!     let ctx = authz.security_context(Some(User::new(42, "alice")));
//!     if ctx.has_write_perm("library").await? {
//!         println!("alice may push to library");
//!     }
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

// Public module exports
pub mod auth;
pub mod config;
pub mod core;
pub mod storage;
pub mod utils;

// Re-export main types
pub use auth::{MembershipResolver, PermissionLevel, Role, RoleCatalog, RoleSet, SecurityContext};
pub use config::Config;
pub use core::models::{EntityType, GroupType, Member, Project, ProjectRef, User, UserGroup};
pub use core::traits::{MemberStore, ProjectManager};
pub use storage::StorageLayer;
pub use utils::error::{AuthzError, Result};

use tracing::info;
use utils::logging::AuditLogger;

/// Process-wide authorization service
///
/// Owns the storage collaborators and hands out one [`SecurityContext`] per
/// request.
#[derive(Debug, Clone)]
pub struct Authz {
    config: Config,
    storage: StorageLayer,
    audit: AuditLogger,
}

impl Authz {
    /// Connect the configured storage backend
    pub async fn new(config: Config) -> Result<Self> {
        info!("Creating authorization service");

        config.validate()?;
        let storage = StorageLayer::new(config.storage()).await?;

        Ok(Self::with_storage(config, storage))
    }

    /// Use an already built storage layer
    pub fn with_storage(config: Config, storage: StorageLayer) -> Self {
        let audit = AuditLogger::new(config.security());
        Self {
            config,
            storage,
            audit,
        }
    }

    /// Security context for one request; `None` is the anonymous principal
    pub fn security_context(&self, user: Option<User>) -> SecurityContext {
        self.storage.security_context(user).with_audit(self.audit)
    }

    /// Active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Storage collaborators
    pub fn storage(&self) -> &StorageLayer {
        &self.storage
    }

    /// Check that the storage backend is reachable
    pub async fn health_check(&self) -> Result<()> {
        self.storage.health_check().await
    }
}

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
