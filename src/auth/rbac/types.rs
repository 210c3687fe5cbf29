//! RBAC type definitions

use serde::{Deserialize, Serialize};

/// Role a principal can hold
///
/// Variants are declared in privilege order so the derived `Ord` is the
/// privilege order. "No role" is the absence of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    /// Read-only project member
    #[serde(rename = "guest")]
    Guest,
    /// Project member who can push
    #[serde(rename = "developer")]
    Developer,
    /// Project administrator
    #[serde(rename = "projectAdmin")]
    ProjectAdmin,
    /// Global administrator; never stored in a membership row
    #[serde(rename = "sysAdmin")]
    SystemAdmin,
}

impl Role {
    /// Project-scoped roles, lowest privilege first
    pub const PROJECT_ROLES: [Role; 3] = [Role::Guest, Role::Developer, Role::ProjectAdmin];
}

/// Permission level implied by a role, lowest to highest
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PermissionLevel {
    #[default]
    None,
    Read,
    ReadWrite,
    All,
}

/// Role definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleDefinition {
    /// Role
    pub role: Role,
    /// Canonical role name
    pub name: &'static str,
    /// Role description
    pub description: &'static str,
    /// Permission granted by this role
    pub permission: PermissionLevel,
    /// Whether the role can be bound to a project through membership
    pub project_scoped: bool,
}
