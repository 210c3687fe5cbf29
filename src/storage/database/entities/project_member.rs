use crate::auth::rbac::Role;
use crate::core::models::{EntityType, Member};
use crate::utils::error::AuthzError;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Project member database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "project_member")]
pub struct Model {
    /// Membership row ID
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Project ID
    pub project_id: i64,

    /// User ID or group ID
    pub entity_id: i64,

    /// 'u' for users, 'g' for groups
    pub entity_type: String,

    /// Role code
    pub role: i32,

    /// Creation timestamp
    pub creation_time: DateTimeWithTimeZone,

    /// Last update timestamp
    pub update_time: DateTimeWithTimeZone,
}

/// Project member entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Owning project
    #[sea_orm(
        belongs_to = "super::project::Entity",
        from = "Column::ProjectId",
        to = "super::project::Column::ProjectId",
        on_delete = "Cascade"
    )]
    Project,
}

impl Related<super::project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert to the domain membership row
    ///
    /// Unknown codes are a storage integrity problem, not caller input.
    pub fn to_domain_member(&self) -> crate::utils::error::Result<Member> {
        let entity_type = EntityType::from_code(&self.entity_type).map_err(|_| {
            AuthzError::storage(format!(
                "project_member {} has unknown entity type '{}'",
                self.id, self.entity_type
            ))
        })?;
        let role = Role::from_code(self.role).map_err(|_| {
            AuthzError::storage(format!(
                "project_member {} has unknown role code {}",
                self.id, self.role
            ))
        })?;

        Ok(Member {
            id: self.id,
            project_id: self.project_id,
            entity_id: self.entity_id,
            entity_type,
            role,
        })
    }
}
