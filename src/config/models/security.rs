//! Security decision configuration

use super::authz::env_var;
use super::*;
use serde::{Deserialize, Serialize};

/// Security decision configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Log system administrator overrides at info level instead of debug
    #[serde(default = "default_true")]
    pub audit_admin_override: bool,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            audit_admin_override: true,
        }
    }
}

impl SecurityConfig {
    pub fn from_env() -> crate::utils::error::Result<Self> {
        let mut config = Self::default();
        if let Some(audit) = env_var("AUTHZ_AUDIT_ADMIN_OVERRIDE")? {
            config.audit_admin_override = audit;
        }
        Ok(config)
    }

    pub fn merge(mut self, other: Self) -> Self {
        if !other.audit_admin_override {
            self.audit_admin_override = other.audit_admin_override;
        }
        self
    }
}
