use crate::core::models::{GroupType, User, UserGroup};
use crate::utils::error::{AuthzError, Result};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, user_group};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Onboard a user group; LDAP groups must carry a unique DN
    pub async fn create_user_group(
        &self,
        name: &str,
        group_type: GroupType,
        ldap_group_dn: Option<&str>,
    ) -> Result<UserGroup> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AuthzError::invalid_input("group name is empty"));
        }
        let dn = ldap_group_dn.map(str::trim).filter(|dn| !dn.is_empty());
        if group_type == GroupType::Ldap && dn.is_none() {
            return Err(AuthzError::invalid_input(format!(
                "LDAP group '{}' has no DN",
                name
            )));
        }
        debug!("Onboarding {} group {}", group_type, name);

        if let Some(dn) = dn {
            if self.find_group_id_by_dn(dn).await?.is_some() {
                return Err(AuthzError::invalid_input(format!(
                    "LDAP group {} is already onboarded",
                    dn
                )));
            }
        }

        let now: DateTimeWithTimeZone = chrono::Utc::now().into();
        let model = user_group::ActiveModel {
            id: NotSet,
            group_name: Set(name.to_string()),
            group_type: Set(group_type.code()),
            ldap_group_dn: Set(dn.map(str::to_owned)),
            creation_time: Set(now),
            update_time: Set(now),
        }
        .insert(&self.db)
        .await
        .map_err(AuthzError::Database)?;

        model.to_domain_group()
    }

    /// ID of the group onboarded under an LDAP DN
    pub async fn find_group_id_by_dn(&self, ldap_group_dn: &str) -> Result<Option<i64>> {
        let model = entities::UserGroup::find()
            .filter(user_group::Column::LdapGroupDn.eq(ldap_group_dn.trim()))
            .one(&self.db)
            .await
            .map_err(AuthzError::Database)?;

        Ok(model.map(|m| m.id))
    }

    /// Registry group IDs for a user, mapping DN-only LDAP groups in one query
    pub(super) async fn user_group_ids(&self, user: &User) -> Result<Vec<i64>> {
        let mut ids: Vec<i64> = user.group_ids().collect();

        let dns: Vec<&str> = user.unresolved_group_dns().collect();
        if !dns.is_empty() {
            let rows = entities::UserGroup::find()
                .filter(user_group::Column::LdapGroupDn.is_in(dns))
                .all(&self.db)
                .await
                .map_err(AuthzError::Database)?;
            ids.extend(rows.into_iter().map(|row| row.id));
        }

        ids.sort_unstable();
        ids.dedup();
        Ok(ids)
    }
}
