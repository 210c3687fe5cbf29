//! In-memory project and membership store
//!
//! Implements both collaborator contracts over concurrent maps. Used when no
//! database is configured and as a fixture backend in tests.


use crate::auth::rbac::Role;
use crate::core::models::{EntityType, GroupType, Member, Project, ProjectRef, User, UserGroup};
use crate::core::traits::{MemberStore, ProjectManager};
use crate::utils::error::{AuthzError, Result};
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::collections::HashSet;
use std::sync::atomic::{AtomicI64, Ordering};
use tracing::debug;

type MemberKey = (i64, i64, EntityType);

/// Concurrent in-memory store
#[derive(Debug, Default)]
pub struct InMemoryStore {
    projects: DashMap<i64, Project>,
    project_names: DashMap<String, i64>,
    members: DashMap<MemberKey, Member>,
    groups: DashMap<i64, UserGroup>,
    group_dns: DashMap<String, i64>,
    next_project_id: AtomicI64,
    next_member_id: AtomicI64,
    next_group_id: AtomicI64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a project and assign it an ID
    pub fn add_project(&self, name: &str, owner_id: i64, public: bool) -> Result<Project> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AuthzError::invalid_input("project name is empty"));
        }

        // The name slot stays locked until the project is in place
        let project = match self.project_names.entry(name.to_string()) {
            Entry::Occupied(_) => {
                return Err(AuthzError::invalid_input(format!(
                    "project '{}' already exists",
                    name
                )));
            }
            Entry::Vacant(slot) => {
                let id = self.next_project_id.fetch_add(1, Ordering::SeqCst) + 1;
                let project = Project::new(id, name, owner_id).with_public(public);
                self.projects.insert(id, project.clone());
                slot.insert(id);
                project
            }
        };

        debug!("Added project {} ({})", project.name, project.project_id);
        Ok(project)
    }

    /// Change project visibility
    pub fn set_public(&self, project_id: i64, public: bool) -> Result<()> {
        let mut project = self
            .projects
            .get_mut(&project_id)
            .ok_or_else(|| AuthzError::not_found(format!("project {}", project_id)))?;
        project.public = public;
        project.update_time = chrono::Utc::now();
        Ok(())
    }

    /// Delete a project together with its membership rows
    pub fn delete_project(&self, project_id: i64) -> bool {
        self.members.retain(|key, _| key.0 != project_id);
        match self.projects.remove(&project_id) {
            Some((_, project)) => {
                self.project_names.remove(&project.name);
                true
            }
            None => false,
        }
    }

    /// Onboard a user group
    ///
    /// A positive ID on `group` is kept, otherwise one is assigned. LDAP
    /// groups must carry a DN, and each DN can be onboarded once.
    pub fn add_group(&self, group: UserGroup) -> Result<UserGroup> {
        let name = group.name.trim();
        if name.is_empty() {
            return Err(AuthzError::invalid_input("group name is empty"));
        }
        let dn = group
            .ldap_group_dn
            .as_deref()
            .map(str::trim)
            .filter(|dn| !dn.is_empty())
            .map(str::to_owned);
        if group.group_type == GroupType::Ldap && dn.is_none() {
            return Err(AuthzError::invalid_input(format!(
                "LDAP group '{}' has no DN",
                name
            )));
        }

        let dn_slot = match &dn {
            Some(dn) => match self.group_dns.entry(dn.clone()) {
                Entry::Occupied(_) => {
                    return Err(AuthzError::invalid_input(format!(
                        "LDAP group {} is already onboarded",
                        dn
                    )));
                }
                Entry::Vacant(slot) => Some(slot),
            },
            None => None,
        };

        let id = if group.is_resolved() {
            self.next_group_id.fetch_max(group.id, Ordering::SeqCst);
            group.id
        } else {
            self.next_group_id.fetch_add(1, Ordering::SeqCst) + 1
        };
        let onboarded = UserGroup {
            id,
            name: name.to_string(),
            group_type: group.group_type,
            ldap_group_dn: dn,
        };

        match self.groups.entry(id) {
            Entry::Occupied(_) => {
                return Err(AuthzError::invalid_input(format!(
                    "group {} already exists",
                    id
                )));
            }
            Entry::Vacant(slot) => {
                slot.insert(onboarded.clone());
            }
        }
        if let Some(slot) = dn_slot {
            slot.insert(id);
        }

        debug!("Onboarded {} group {} ({})", onboarded.group_type, onboarded.name, id);
        Ok(onboarded)
    }

    /// Bind an entity to a project; returns the membership row ID
    pub fn add_member(&self, member: Member) -> Result<i64> {
        if !self.projects.contains_key(&member.project_id) {
            return Err(AuthzError::not_found(format!(
                "project {}",
                member.project_id
            )));
        }
        if !member.role.is_project_scoped() {
            return Err(AuthzError::invalid_input(format!(
                "role {} cannot be granted on a project",
                member.role
            )));
        }

        let key = (member.project_id, member.entity_id, member.entity_type);
        match self.members.entry(key) {
            Entry::Occupied(_) => Err(AuthzError::invalid_input(format!(
                "{} {} is already a member of project {}",
                member.entity_type, member.entity_id, member.project_id
            ))),
            Entry::Vacant(slot) => {
                let id = self.next_member_id.fetch_add(1, Ordering::SeqCst) + 1;
                slot.insert(Member { id, ..member });
                Ok(id)
            }
        }
    }

    /// Change the role of an existing membership row
    pub fn update_member_role(
        &self,
        project_id: i64,
        entity_id: i64,
        entity_type: EntityType,
        role: Role,
    ) -> Result<()> {
        if !role.is_project_scoped() {
            return Err(AuthzError::invalid_input(format!(
                "role {} cannot be granted on a project",
                role
            )));
        }

        let mut member = self
            .members
            .get_mut(&(project_id, entity_id, entity_type))
            .ok_or_else(|| {
                AuthzError::not_found(format!(
                    "{} {} on project {}",
                    entity_type, entity_id, project_id
                ))
            })?;
        member.role = role;
        Ok(())
    }

    /// Remove a membership row
    pub fn remove_member(&self, project_id: i64, entity_id: i64, entity_type: EntityType) -> bool {
        self.members
            .remove(&(project_id, entity_id, entity_type))
            .is_some()
    }

    fn find_by_name(&self, name: &str) -> Option<Project> {
        let id = *self.project_names.get(name)?;
        self.projects.get(&id).map(|p| p.value().clone())
    }

    fn group_id_for_dn(&self, dn: &str) -> Option<i64> {
        self.group_dns.get(dn.trim()).map(|id| *id.value())
    }
}

#[async_trait]
impl ProjectManager for InMemoryStore {
    async fn get(&self, project: &ProjectRef) -> Result<Option<Project>> {
        Ok(match project {
            ProjectRef::Id(id) => self.projects.get(id).map(|p| p.value().clone()),
            ProjectRef::Name(name) => self.find_by_name(name),
        })
    }

    async fn list_accessible(&self, user: Option<&User>) -> Result<Vec<Project>> {
        let mut entities: HashSet<(i64, EntityType)> = HashSet::new();
        if let Some(user) = user {
            entities.insert((user.user_id, EntityType::User));
            entities.extend(user.group_ids().map(|id| (id, EntityType::Group)));
            entities.extend(
                user.unresolved_group_dns()
                    .filter_map(|dn| self.group_id_for_dn(dn))
                    .map(|id| (id, EntityType::Group)),
            );
        }

        let member_of: HashSet<i64> = self
            .members
            .iter()
            .filter(|entry| {
                let (_, entity_id, entity_type) = *entry.key();
                entities.contains(&(entity_id, entity_type))
            })
            .map(|entry| entry.key().0)
            .collect();

        let mut projects: Vec<Project> = self
            .projects
            .iter()
            .filter(|entry| entry.value().public || member_of.contains(entry.key()))
            .map(|entry| entry.value().clone())
            .collect();
        projects.sort_by_key(|p| p.project_id);

        Ok(projects)
    }
}

#[async_trait]
impl MemberStore for InMemoryStore {
    async fn get_member(
        &self,
        project_id: i64,
        entity_id: i64,
        entity_type: EntityType,
    ) -> Result<Option<Member>> {
        Ok(self
            .members
            .get(&(project_id, entity_id, entity_type))
            .map(|m| m.value().clone()))
    }

    async fn group_id_by_dn(&self, ldap_group_dn: &str) -> Result<Option<i64>> {
        Ok(self.group_id_for_dn(ldap_group_dn))
    }
}
