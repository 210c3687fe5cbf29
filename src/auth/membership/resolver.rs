//! Membership resolver

use crate::auth::rbac::{Role, RoleSet};
use crate::core::models::{EntityType, Project, ProjectRef, User};
use crate::core::traits::{MemberStore, ProjectManager};
use crate::utils::error::Result;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// Resolves the roles a principal holds on a project
///
/// Not-found is a normal negative result. Storage failures propagate unchanged
/// and are never retried here.
#[derive(Clone)]
pub struct MembershipResolver {
    project_manager: Arc<dyn ProjectManager>,
    members: Arc<dyn MemberStore>,
}

impl std::fmt::Debug for MembershipResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MembershipResolver").finish_non_exhaustive()
    }
}

impl MembershipResolver {
    /// Create a resolver over the given collaborators
    pub fn new(project_manager: Arc<dyn ProjectManager>, members: Arc<dyn MemberStore>) -> Self {
        Self {
            project_manager,
            members,
        }
    }

    /// All distinct roles the user holds on the project, direct and group-derived
    ///
    /// Anonymous callers and unknown projects yield the empty set. System
    /// administrators get their stored roles only; the override is applied by
    /// the security context.
    pub async fn resolve(&self, user: Option<&User>, project: &ProjectRef) -> Result<RoleSet> {
        project.validate()?;

        let Some(user) = user else {
            return Ok(RoleSet::new());
        };
        let Some(project) = self.lookup_project(project).await? else {
            return Ok(RoleSet::new());
        };

        let mut roles = RoleSet::new();
        if let Some(role) = self.direct_role_on(user, &project).await? {
            roles.insert(role);
        }
        roles.extend(self.group_roles_on(user, &project).await?);

        debug!(
            "Resolved roles {:?} for user {} on project {}",
            roles, user.username, project.name
        );
        Ok(roles)
    }

    /// Role bound to the user itself, ignoring groups
    pub async fn direct_role(&self, user: Option<&User>, project: &ProjectRef) -> Result<Option<Role>> {
        project.validate()?;

        let Some(user) = user else {
            return Ok(None);
        };
        match self.lookup_project(project).await? {
            Some(project) => self.direct_role_on(user, &project).await,
            None => Ok(None),
        }
    }

    /// Roles inherited through the user's groups, ignoring direct membership
    pub async fn roles_by_group(&self, user: Option<&User>, project: &ProjectRef) -> Result<RoleSet> {
        project.validate()?;

        let Some(user) = user else {
            return Ok(RoleSet::new());
        };
        match self.lookup_project(project).await? {
            Some(project) => self.group_roles_on(user, &project).await,
            None => Ok(RoleSet::new()),
        }
    }

    async fn lookup_project(&self, project: &ProjectRef) -> Result<Option<Project>> {
        let resolved = self.project_manager.get(project).await.inspect_err(|e| {
            warn!("Project lookup failed for {}: {}", project, e);
        })?;

        if resolved.is_none() {
            debug!("Project {} not found, no membership", project);
        }
        Ok(resolved)
    }

    async fn direct_role_on(&self, user: &User, project: &Project) -> Result<Option<Role>> {
        self.member_role(project, user.user_id, EntityType::User).await
    }

    async fn group_roles_on(&self, user: &User, project: &Project) -> Result<RoleSet> {
        let mut roles = RoleSet::new();
        for group_id in self.group_ids_of(user).await? {
            if let Some(role) = self.member_role(project, group_id, EntityType::Group).await? {
                roles.insert(role);
            }
        }
        Ok(roles)
    }

    /// Registry group IDs for the user, mapping DN-only LDAP groups by DN
    async fn group_ids_of(&self, user: &User) -> Result<BTreeSet<i64>> {
        let mut ids: BTreeSet<i64> = user.group_ids().collect();
        for dn in user.unresolved_group_dns() {
            let resolved = self.members.group_id_by_dn(dn).await.inspect_err(|e| {
                warn!("Group lookup failed for DN {}: {}", dn, e);
            })?;
            match resolved {
                Some(id) => {
                    ids.insert(id);
                }
                None => debug!("LDAP group {} is not onboarded", dn),
            }
        }
        Ok(ids)
    }

    async fn member_role(
        &self,
        project: &Project,
        entity_id: i64,
        entity_type: EntityType,
    ) -> Result<Option<Role>> {
        let member = self
            .members
            .get_member(project.project_id, entity_id, entity_type)
            .await
            .inspect_err(|e| {
                warn!(
                    "Membership lookup failed for {} {} on project {}: {}",
                    entity_type, entity_id, project.name, e
                );
            })?;

        Ok(member.and_then(|m| {
            if m.role.is_project_scoped() {
                Some(m.role)
            } else {
                warn!(
                    "Ignoring non project role {} on membership row {}",
                    m.role, m.id
                );
                None
            }
        }))
    }
}
