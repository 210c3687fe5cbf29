use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Metadata key holding the project visibility flag
pub const PUBLIC_KEY: &str = "public";

/// Project metadata database model (key/value per project)
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "project_metadata")]
pub struct Model {
    /// Row ID
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Project ID
    pub project_id: i64,

    /// Metadata key
    pub name: String,

    /// Metadata value
    pub value: String,

    /// Creation timestamp
    pub creation_time: DateTimeWithTimeZone,

    /// Last update timestamp
    pub update_time: DateTimeWithTimeZone,
}

/// Project metadata entity relations
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

/// Parse a stored boolean flag; anything but exactly "true" is false
pub fn parse_flag(value: &str) -> bool {
    value == "true"
}
