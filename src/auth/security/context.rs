//! Security context

use crate::auth::membership::MembershipResolver;
use crate::auth::rbac::{PermissionLevel, Role};
use crate::core::models::{Project, ProjectRef, User};
use crate::core::traits::{MemberStore, ProjectManager};
use crate::utils::error::Result;
use crate::utils::logging::AuditLogger;
use std::sync::Arc;
use tracing::debug;

/// Authorization entry point for one principal
///
/// The principal, including its group list, is an immutable snapshot taken at
/// construction. Every query is an independent read; storage failures are
/// returned as errors and never reported as a denial.
#[derive(Clone)]
pub struct SecurityContext {
    user: Option<Arc<User>>,
    project_manager: Arc<dyn ProjectManager>,
    resolver: MembershipResolver,
    audit: AuditLogger,
}

impl std::fmt::Debug for SecurityContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecurityContext")
            .field("user", &self.username())
            .field("sys_admin", &self.is_sys_admin())
            .finish_non_exhaustive()
    }
}

impl SecurityContext {
    /// Create a context for `user`; `None` is the anonymous principal
    pub fn new(
        user: Option<User>,
        project_manager: Arc<dyn ProjectManager>,
        members: Arc<dyn MemberStore>,
    ) -> Self {
        let resolver = MembershipResolver::new(project_manager.clone(), members);
        Self {
            user: user.map(Arc::new),
            project_manager,
            resolver,
            audit: AuditLogger::default(),
        }
    }

    /// Replace the audit logger
    pub fn with_audit(mut self, audit: AuditLogger) -> Self {
        self.audit = audit;
        self
    }

    /// Bound principal, if any
    pub fn user(&self) -> Option<&User> {
        self.user.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Username of the principal, empty when anonymous
    pub fn username(&self) -> &str {
        self.user.as_deref().map_or("", |u| u.username.as_str())
    }

    pub fn is_sys_admin(&self) -> bool {
        self.user.as_deref().is_some_and(|u| u.has_admin_role)
    }

    /// Service principals are not supported; always false
    pub fn is_solution_user(&self) -> bool {
        false
    }

    /// Read access: public project, system admin, or any role on the project
    pub async fn has_read_perm(&self, project: impl Into<ProjectRef>) -> Result<bool> {
        let project = project.into();
        project.validate()?;

        if self.is_sys_admin() {
            self.audit
                .log_admin_override(self.username(), &project, PermissionLevel::Read);
            return Ok(true);
        }

        let granted = if self.project_manager.is_public(&project).await? {
            true
        } else if self.is_authenticated() {
            !self.resolver.resolve(self.user(), &project).await?.is_empty()
        } else {
            false
        };

        self.audit
            .log_decision(self.username(), &project, PermissionLevel::Read, granted);
        Ok(granted)
    }

    /// Write access: system admin, developer or project admin
    pub async fn has_write_perm(&self, project: impl Into<ProjectRef>) -> Result<bool> {
        self.check_role_permission(project.into(), PermissionLevel::ReadWrite)
            .await
    }

    /// Full access: system admin or project admin
    pub async fn has_all_perm(&self, project: impl Into<ProjectRef>) -> Result<bool> {
        self.check_role_permission(project.into(), PermissionLevel::All)
            .await
    }

    /// Effective permission on the project
    ///
    /// System admins get [`PermissionLevel::All`]. Everyone else gets the
    /// highest permission among their roles, raised to read on public projects.
    pub async fn permission_level(&self, project: impl Into<ProjectRef>) -> Result<PermissionLevel> {
        let project = project.into();
        project.validate()?;

        if self.is_sys_admin() {
            self.audit
                .log_admin_override(self.username(), &project, PermissionLevel::All);
            return Ok(PermissionLevel::All);
        }

        let mut level = if self.is_authenticated() {
            self.resolver
                .resolve(self.user(), &project)
                .await?
                .max_permission()
        } else {
            PermissionLevel::None
        };

        if level < PermissionLevel::Read && self.project_manager.is_public(&project).await? {
            level = PermissionLevel::Read;
        }

        debug!(
            target: "security",
            user = self.username(),
            project = %project,
            permission = %level,
            "Computed effective permission"
        );
        Ok(level)
    }

    /// Project-scoped roles held on the project, highest privilege first
    ///
    /// Anonymous principals and unknown projects get an empty list. System
    /// admins get their stored roles; the admin override is not a role.
    pub async fn project_roles(&self, project: impl Into<ProjectRef>) -> Result<Vec<Role>> {
        let project = project.into();
        let roles = self.resolver.resolve(self.user(), &project).await?;
        Ok(roles.to_vec())
    }

    /// Projects visible to the principal: public ones plus every project it
    /// holds a role on
    pub async fn my_projects(&self) -> Result<Vec<Project>> {
        let projects = self.project_manager.list_accessible(self.user()).await?;
        debug!(
            "User '{}' can access {} projects",
            self.username(),
            projects.len()
        );
        Ok(projects)
    }

    async fn check_role_permission(
        &self,
        project: ProjectRef,
        required: PermissionLevel,
    ) -> Result<bool> {
        project.validate()?;

        if self.is_sys_admin() {
            self.audit
                .log_admin_override(self.username(), &project, required);
            return Ok(true);
        }

        // Public visibility never grants more than read.
        let granted = if self.is_authenticated() {
            let held = self
                .resolver
                .resolve(self.user(), &project)
                .await?
                .max_permission();
            held >= required
        } else {
            false
        };

        self.audit
            .log_decision(self.username(), &project, required, granted);
        Ok(granted)
    }
}
