//! Project membership models

use crate::auth::rbac::Role;
use crate::utils::error::{AuthzError, Result};
use serde::{Deserialize, Serialize};

/// Binding of one user or group to one project with exactly one role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Membership row ID
    pub id: i64,
    /// Project ID
    pub project_id: i64,
    /// User ID or group ID, depending on `entity_type`
    pub entity_id: i64,
    /// Kind of entity the row binds
    pub entity_type: EntityType,
    /// Role granted on the project
    pub role: Role,
}

impl Member {
    /// Create a user membership row
    pub fn user(project_id: i64, user_id: i64, role: Role) -> Self {
        Self {
            id: 0,
            project_id,
            entity_id: user_id,
            entity_type: EntityType::User,
            role,
        }
    }

    /// Create a group membership row
    pub fn group(project_id: i64, group_id: i64, role: Role) -> Self {
        Self {
            id: 0,
            project_id,
            entity_id: group_id,
            entity_type: EntityType::Group,
            role,
        }
    }
}

/// Kind of entity bound by a membership row
///
/// Part of the membership key: user 5 and group 5 are distinct members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    User,
    Group,
}

impl EntityType {
    /// Storage code
    pub fn code(&self) -> &'static str {
        match self {
            EntityType::User => "u",
            EntityType::Group => "g",
        }
    }

    /// Parse a storage code
    pub fn from_code(code: &str) -> Result<Self> {
        match code {
            "u" => Ok(EntityType::User),
            "g" => Ok(EntityType::Group),
            other => Err(AuthzError::invalid_input(format!(
                "unknown member entity type '{}'",
                other
            ))),
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::User => write!(f, "user"),
            EntityType::Group => write!(f, "group"),
        }
    }
}
