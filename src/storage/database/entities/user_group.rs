use crate::core::models::{GroupType, UserGroup};
use crate::utils::error::AuthzError;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Onboarded user group database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "user_group")]
pub struct Model {
    /// Group ID
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Group name
    pub group_name: String,

    /// Group type code (1 = LDAP, 2 = internal)
    pub group_type: i32,

    /// Distinguished name for LDAP groups
    #[sea_orm(unique)]
    pub ldap_group_dn: Option<String>,

    /// Creation timestamp
    pub creation_time: DateTimeWithTimeZone,

    /// Last update timestamp
    pub update_time: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert to the domain group
    pub fn to_domain_group(&self) -> crate::utils::error::Result<UserGroup> {
        let group_type = GroupType::from_code(self.group_type).ok_or_else(|| {
            AuthzError::storage(format!(
                "unknown group type code {} on group {}",
                self.group_type, self.id
            ))
        })?;

        Ok(UserGroup {
            id: self.id,
            name: self.group_name.clone(),
            group_type,
            ldap_group_dn: self.ldap_group_dn.clone(),
        })
    }
}
