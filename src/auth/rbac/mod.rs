//! Role catalog for project-scoped access control
//!
//! Defines the closed set of roles, the permission level each one implies, and
//! the max-permission rule used when a principal holds several roles on the
//! same project.

mod catalog;
mod permissions;
mod role_set;
mod roles;
mod types;

// Re-export public types and structs
pub use catalog::RoleCatalog;
pub use role_set::RoleSet;
pub use types::{PermissionLevel, Role, RoleDefinition};
