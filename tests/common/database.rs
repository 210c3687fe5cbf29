//! Test database utilities
//!
//! Each test gets an isolated in-memory SQLite database with migrations applied.

use super::fixtures::{Scenario, UserFactory};
use registry_authz::config::DatabaseConfig;
use registry_authz::storage::database::Database;
use registry_authz::{GroupType, Member, Role};
use std::sync::Arc;

/// Test database wrapper providing isolated in-memory SQLite instances
#[derive(Debug, Clone)]
pub struct TestDatabase {
    inner: Arc<Database>,
}

impl TestDatabase {
    /// Create a new migrated in-memory database
    pub async fn new() -> Self {
        let db = Database::new(&test_db_config())
            .await
            .expect("Failed to create in-memory test database");

        db.migrate()
            .await
            .expect("Failed to run database migrations");

        Self {
            inner: Arc::new(db),
        }
    }

    /// Create a database holding the standard registry scenario
    pub async fn seeded() -> (Self, Scenario) {
        let db = Self::new().await;
        let scenario = db.seed_scenario().await;
        (db, scenario)
    }

    /// Get reference to the underlying database
    pub fn db(&self) -> &Database {
        &self.inner
    }

    /// Get Arc to the underlying database
    pub fn db_arc(&self) -> Arc<Database> {
        Arc::clone(&self.inner)
    }

    async fn seed_scenario(&self) -> Scenario {
        let db = self.db();
        let private = db
            .create_project("private_project", UserFactory::ADMIN_ID, false)
            .await
            .expect("Failed to create private project");
        let library = db
            .create_project("library", UserFactory::ADMIN_ID, true)
            .await
            .expect("Failed to create public project");

        for member in Scenario::members(private.project_id) {
            db.add_project_member(&member)
                .await
                .expect("Failed to add project member");
        }
        db.add_project_member(&Member::group(
            private.project_id,
            UserFactory::DEV_GROUP_ID,
            Role::Developer,
        ))
        .await
        .expect("Failed to add group member");

        let admin_group = db
            .create_user_group(
                "registry_admins",
                GroupType::Ldap,
                Some(UserFactory::ADMIN_GROUP_DN),
            )
            .await
            .expect("Failed to onboard LDAP group");
        db.add_project_member(&Member::group(
            private.project_id,
            admin_group.id,
            Role::ProjectAdmin,
        ))
        .await
        .expect("Failed to add LDAP group member");

        Scenario {
            private,
            library,
            admin_group,
        }
    }
}

/// Helper to create a simple test database config
pub fn test_db_config() -> DatabaseConfig {
    DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1, // In-memory DB only supports 1 connection
        connection_timeout: 5,
        enabled: true,
    }
}
