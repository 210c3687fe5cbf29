//! Effective role set

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::types::{PermissionLevel, Role};

/// Deduplicated set of roles a principal holds on one project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleSet(BTreeSet<Role>);

impl RoleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a role; returns false if it was already held
    pub fn insert(&mut self, role: Role) -> bool {
        self.0.insert(role)
    }

    pub fn contains(&self, role: Role) -> bool {
        self.0.contains(&role)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Roles from lowest to highest privilege
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Role> {
        self.0.iter()
    }

    /// Most privileged role held, if any
    pub fn highest(&self) -> Option<Role> {
        self.0.last().copied()
    }

    /// Effective permission: the maximum over held roles
    pub fn max_permission(&self) -> PermissionLevel {
        PermissionLevel::max_of(self.0.iter())
    }

    /// Merge another set into this one
    pub fn extend(&mut self, other: RoleSet) {
        self.0.extend(other.0);
    }

    /// Roles from highest to lowest privilege
    pub fn to_vec(&self) -> Vec<Role> {
        self.0.iter().rev().copied().collect()
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for RoleSet {
    type Item = Role;
    type IntoIter = std::collections::btree_set::IntoIter<Role>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
