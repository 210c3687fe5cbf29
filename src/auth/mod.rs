//! Authorization system
//!
//! - **rbac**: role catalog, permission levels and the max-permission rule
//! - **membership**: resolution of the roles a principal holds on a project
//! - **security**: the request-scoped decision entry point

pub mod membership;
pub mod rbac;
pub mod security;

// Re-export commonly used types
pub use membership::MembershipResolver;
pub use rbac::{PermissionLevel, Role, RoleCatalog, RoleSet};
pub use security::SecurityContext;
