use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectMetadata::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectMetadata::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProjectMetadata::ProjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProjectMetadata::Name)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ProjectMetadata::Value).string_len(255).not_null())
                    .col(
                        ColumnDef::new(ProjectMetadata::CreationTime)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ProjectMetadata::UpdateTime)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_metadata_project_id")
                            .from(ProjectMetadata::Table, ProjectMetadata::ProjectId)
                            .to(Project::Table, Project::ProjectId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_project_metadata_project_id_name")
                    .table(ProjectMetadata::Table)
                    .col(ProjectMetadata::ProjectId)
                    .col(ProjectMetadata::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectMetadata::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProjectMetadata {
    Table,
    Id,
    ProjectId,
    Name,
    Value,
    CreationTime,
    UpdateTime,
}

#[derive(DeriveIden)]
enum Project {
    Table,
    ProjectId,
}
