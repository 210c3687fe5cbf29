//! Permission level methods

use super::types::{PermissionLevel, Role};

impl PermissionLevel {
    /// Effective level for a collection of held roles: the maximum, or `None`
    pub fn max_of<'a, I>(roles: I) -> Self
    where
        I: IntoIterator<Item = &'a Role>,
    {
        roles
            .into_iter()
            .map(Role::permission)
            .max()
            .unwrap_or(PermissionLevel::None)
    }

    pub fn allows_read(&self) -> bool {
        *self >= PermissionLevel::Read
    }

    pub fn allows_write(&self) -> bool {
        *self >= PermissionLevel::ReadWrite
    }

    pub fn allows_all(&self) -> bool {
        *self == PermissionLevel::All
    }
}

impl std::fmt::Display for PermissionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PermissionLevel::None => write!(f, "none"),
            PermissionLevel::Read => write!(f, "read"),
            PermissionLevel::ReadWrite => write!(f, "read_write"),
            PermissionLevel::All => write!(f, "all"),
        }
    }
}
