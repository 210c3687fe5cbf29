//! Principal models
//!
//! A [`User`] is a fully populated principal: the caller resolves its group
//! list before building a security context, and the core never mutates it.

use serde::{Deserialize, Serialize};

/// Authenticated principal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User ID
    pub user_id: i64,
    /// Username (unique)
    pub username: String,
    /// Whether the user holds the system administrator role
    #[serde(default)]
    pub has_admin_role: bool,
    /// Groups the user belongs to, in directory order
    #[serde(default)]
    pub groups: Vec<UserGroup>,
}

impl User {
    /// Create a regular user with no groups
    pub fn new(user_id: i64, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
            has_admin_role: false,
            groups: Vec::new(),
        }
    }

    /// Mark the user as a system administrator
    pub fn with_admin_role(mut self) -> Self {
        self.has_admin_role = true;
        self
    }

    /// Attach a group list snapshot
    pub fn with_groups(mut self, groups: Vec<UserGroup>) -> Self {
        self.groups = groups;
        self
    }

    /// IDs of groups that have been onboarded and can carry membership rows
    pub fn group_ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.groups.iter().filter(|g| g.is_resolved()).map(|g| g.id)
    }

    /// DNs of LDAP groups that arrived without a registry ID
    ///
    /// The storage collaborator maps each one to its onboarded group, if any.
    pub fn unresolved_group_dns(&self) -> impl Iterator<Item = &str> + '_ {
        self.groups
            .iter()
            .filter(|g| !g.is_resolved())
            .filter_map(|g| g.ldap_group_dn.as_deref())
            .map(str::trim)
            .filter(|dn| !dn.is_empty())
    }
}

/// Group a user belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserGroup {
    /// Group ID; zero when the caller only knows the directory DN
    pub id: i64,
    /// Group name
    pub name: String,
    /// Where the group is defined
    pub group_type: GroupType,
    /// Distinguished name in the external directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ldap_group_dn: Option<String>,
}

impl UserGroup {
    /// Create a group managed by the registry itself
    pub fn internal(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            group_type: GroupType::Internal,
            ldap_group_dn: None,
        }
    }

    /// Create a group sourced from an LDAP directory
    pub fn ldap(id: i64, name: impl Into<String>, dn: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            group_type: GroupType::Ldap,
            ldap_group_dn: Some(dn.into()),
        }
    }

    /// Whether the group has a registry ID
    pub fn is_resolved(&self) -> bool {
        self.id > 0
    }
}

/// Group origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupType {
    /// Group managed by the registry
    Internal,
    /// Group sourced from an LDAP directory
    Ldap,
}

impl GroupType {
    /// Integer code used by group storage
    pub fn code(&self) -> i32 {
        match self {
            GroupType::Ldap => 1,
            GroupType::Internal => 2,
        }
    }

    /// Parse a group storage code
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(GroupType::Ldap),
            2 => Some(GroupType::Internal),
            _ => None,
        }
    }
}

impl std::fmt::Display for GroupType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupType::Internal => write!(f, "internal"),
            GroupType::Ldap => write!(f, "ldap"),
        }
    }
}
