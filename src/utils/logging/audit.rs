//! Security decision audit logging

use crate::auth::rbac::PermissionLevel;
use crate::config::SecurityConfig;
use crate::utils::truncate_string;
use tracing::{debug, info};

/// Longest project reference written to a log line
const MAX_PROJECT_LEN: usize = 200;

/// Emits one structured event per authorization decision under the `security` target
#[derive(Debug, Clone, Copy)]
pub struct AuditLogger {
    admin_override_at_info: bool,
}

impl Default for AuditLogger {
    fn default() -> Self {
        Self::new(&SecurityConfig::default())
    }
}

impl AuditLogger {
    pub fn new(config: &SecurityConfig) -> Self {
        Self {
            admin_override_at_info: config.audit_admin_override,
        }
    }

    /// Whether admin overrides are reported at info level
    pub fn audits_admin_override(&self) -> bool {
        self.admin_override_at_info
    }

    /// Log a permission decision
    pub fn log_decision(
        &self,
        user: &str,
        project: &dyn std::fmt::Display,
        permission: PermissionLevel,
        granted: bool,
    ) {
        let project = truncate_string(&project.to_string(), MAX_PROJECT_LEN);
        debug!(
            target: "security",
            user,
            project = %project,
            permission = %permission,
            granted,
            "Authorization {}",
            if granted { "granted" } else { "denied" }
        );
    }

    /// Log a decision granted only because the user is a system administrator
    pub fn log_admin_override(
        &self,
        user: &str,
        project: &dyn std::fmt::Display,
        permission: PermissionLevel,
    ) {
        let project = truncate_string(&project.to_string(), MAX_PROJECT_LEN);
        if self.admin_override_at_info {
            info!(
                target: "security",
                user,
                project = %project,
                permission = %permission,
                granted = true,
                admin_override = true,
                "Authorization granted by system admin override"
            );
        } else {
            debug!(
                target: "security",
                user,
                project = %project,
                permission = %permission,
                granted = true,
                admin_override = true,
                "Authorization granted by system admin override"
            );
        }
    }
}
