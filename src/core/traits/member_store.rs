//! Membership store trait

use crate::core::models::{EntityType, Member};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Point lookups over project membership rows and onboarded groups
///
/// At most one row exists per `(project_id, entity_id, entity_type)`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MemberStore: Send + Sync {
    /// Fetch the membership row for one entity on one project
    async fn get_member(
        &self,
        project_id: i64,
        entity_id: i64,
        entity_type: EntityType,
    ) -> Result<Option<Member>>;

    /// ID of the onboarded group registered under an LDAP group DN
    async fn group_id_by_dn(&self, ldap_group_dn: &str) -> Result<Option<i64>>;
}
