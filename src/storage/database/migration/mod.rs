use sea_orm_migration::prelude::*;

mod m20240101_000001_create_project_table;
mod m20240101_000002_create_project_metadata_table;
mod m20240101_000003_create_project_member_table;
mod m20240101_000004_create_user_group_table;

/// Database migrator for SeaORM
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_project_table::Migration),
            Box::new(m20240101_000002_create_project_metadata_table::Migration),
            Box::new(m20240101_000003_create_project_member_table::Migration),
            Box::new(m20240101_000004_create_user_group_table::Migration),
        ]
    }
}
