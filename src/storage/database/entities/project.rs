use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Project database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "project")]
pub struct Model {
    /// Project ID
    #[sea_orm(primary_key)]
    pub project_id: i64,

    /// Project name (unique)
    #[sea_orm(unique)]
    pub name: String,

    /// Owner user ID
    pub owner_id: i64,

    /// Soft delete marker
    pub deleted: bool,

    /// Creation timestamp
    pub creation_time: DateTimeWithTimeZone,

    /// Last update timestamp
    pub update_time: DateTimeWithTimeZone,
}

/// Project entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Membership rows
    #[sea_orm(has_many = "super::project_member::Entity")]
    ProjectMembers,

    /// Metadata rows
    #[sea_orm(has_many = "super::project_metadata::Entity")]
    ProjectMetadata,
}

impl Related<super::project_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectMembers.def()
    }
}

impl Related<super::project_metadata::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectMetadata.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert to the domain project; visibility lives in project metadata
    pub fn to_domain_project(&self, public: bool) -> crate::core::models::Project {
        crate::core::models::Project {
            project_id: self.project_id,
            name: self.name.clone(),
            owner_id: self.owner_id,
            public,
            creation_time: self.creation_time.naive_utc().and_utc(),
            update_time: self.update_time.naive_utc().and_utc(),
        }
    }
}
