//! Role methods

use crate::utils::error::{AuthzError, Result};
use std::str::FromStr;

use super::types::{PermissionLevel, Role};

impl Role {
    /// Integer code used by membership storage
    ///
    /// Only project-scoped roles have a code.
    pub fn code(&self) -> Option<i32> {
        match self {
            Role::ProjectAdmin => Some(1),
            Role::Developer => Some(2),
            Role::Guest => Some(3),
            Role::SystemAdmin => None,
        }
    }

    /// Parse a membership storage code
    pub fn from_code(code: i32) -> Result<Self> {
        match code {
            1 => Ok(Role::ProjectAdmin),
            2 => Ok(Role::Developer),
            3 => Ok(Role::Guest),
            other => Err(AuthzError::invalid_input(format!(
                "unknown project role code {}",
                other
            ))),
        }
    }

    /// Canonical role name
    pub fn name(&self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::Developer => "developer",
            Role::ProjectAdmin => "projectAdmin",
            Role::SystemAdmin => "sysAdmin",
        }
    }

    /// Permission level this role implies
    pub fn permission(&self) -> PermissionLevel {
        match self {
            Role::Guest => PermissionLevel::Read,
            Role::Developer => PermissionLevel::ReadWrite,
            Role::ProjectAdmin | Role::SystemAdmin => PermissionLevel::All,
        }
    }

    /// Whether the role can be held through project membership
    pub fn is_project_scoped(&self) -> bool {
        !matches!(self, Role::SystemAdmin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Role {
    type Err = AuthzError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "guest" => Ok(Role::Guest),
            "developer" => Ok(Role::Developer),
            "projectAdmin" | "project_admin" => Ok(Role::ProjectAdmin),
            "sysAdmin" | "system_admin" => Ok(Role::SystemAdmin),
            other => Err(AuthzError::invalid_input(format!("unknown role '{}'", other))),
        }
    }
}
