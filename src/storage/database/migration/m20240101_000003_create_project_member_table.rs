use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectMember::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectMember::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProjectMember::ProjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ProjectMember::EntityId).big_integer().not_null())
                    .col(
                        ColumnDef::new(ProjectMember::EntityType)
                            .string_len(1)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ProjectMember::Role).integer().not_null())
                    .col(
                        ColumnDef::new(ProjectMember::CreationTime)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ProjectMember::UpdateTime)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_member_project_id")
                            .from(ProjectMember::Table, ProjectMember::ProjectId)
                            .to(Project::Table, Project::ProjectId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One row per (project, entity, entity type)
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_project_member_unique_entity")
                    .table(ProjectMember::Table)
                    .col(ProjectMember::ProjectId)
                    .col(ProjectMember::EntityId)
                    .col(ProjectMember::EntityType)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_project_member_entity")
                    .table(ProjectMember::Table)
                    .col(ProjectMember::EntityType)
                    .col(ProjectMember::EntityId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProjectMember {
    Table,
    Id,
    ProjectId,
    EntityId,
    EntityType,
    Role,
    CreationTime,
    UpdateTime,
}

#[derive(DeriveIden)]
enum Project {
    Table,
    ProjectId,
}
