//! Role catalog

use std::collections::HashMap;
use tracing::debug;

use super::types::{PermissionLevel, Role, RoleDefinition};

/// Catalog of every role and the permission it implies
#[derive(Debug, Clone)]
pub struct RoleCatalog {
    definitions: HashMap<Role, RoleDefinition>,
}

impl Default for RoleCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl RoleCatalog {
    /// Create the catalog with the built-in roles
    pub fn new() -> Self {
        let definitions = [
            RoleDefinition {
                role: Role::Guest,
                name: Role::Guest.name(),
                description: "Read-only access to project resources",
                permission: Role::Guest.permission(),
                project_scoped: true,
            },
            RoleDefinition {
                role: Role::Developer,
                name: Role::Developer.name(),
                description: "Read and write access to project resources",
                permission: Role::Developer.permission(),
                project_scoped: true,
            },
            RoleDefinition {
                role: Role::ProjectAdmin,
                name: Role::ProjectAdmin.name(),
                description: "Full control of the project, including its members",
                permission: Role::ProjectAdmin.permission(),
                project_scoped: true,
            },
            RoleDefinition {
                role: Role::SystemAdmin,
                name: Role::SystemAdmin.name(),
                description: "Full control of every project, regardless of membership",
                permission: Role::SystemAdmin.permission(),
                project_scoped: false,
            },
        ];

        let definitions: HashMap<Role, RoleDefinition> =
            definitions.into_iter().map(|d| (d.role, d)).collect();
        debug!("Initialized role catalog with {} roles", definitions.len());

        Self { definitions }
    }

    /// Get role definition
    pub fn get(&self, role: Role) -> Option<&RoleDefinition> {
        self.definitions.get(&role)
    }

    /// Get role definition by canonical name
    pub fn get_by_name(&self, name: &str) -> Option<&RoleDefinition> {
        self.definitions.values().find(|d| d.name == name)
    }

    /// Permission granted by a role
    pub fn permission_for(&self, role: Role) -> PermissionLevel {
        self.get(role)
            .map(|d| d.permission)
            .unwrap_or(PermissionLevel::None)
    }

    /// List all roles, lowest privilege first
    pub fn list_roles(&self) -> Vec<&RoleDefinition> {
        let mut roles: Vec<&RoleDefinition> = self.definitions.values().collect();
        roles.sort_by_key(|d| d.role);
        roles
    }

    /// List roles that can be granted through project membership
    pub fn project_roles(&self) -> Vec<&RoleDefinition> {
        self.list_roles()
            .into_iter()
            .filter(|d| d.project_scoped)
            .collect()
    }
}
