use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserGroup::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserGroup::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserGroup::GroupName).string_len(255).not_null())
                    .col(ColumnDef::new(UserGroup::GroupType).integer().not_null())
                    .col(ColumnDef::new(UserGroup::LdapGroupDn).string_len(512).null())
                    .col(
                        ColumnDef::new(UserGroup::CreationTime)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(UserGroup::UpdateTime)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // NULL DNs (internal groups) do not collide
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_user_group_ldap_group_dn")
                    .table(UserGroup::Table)
                    .col(UserGroup::LdapGroupDn)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserGroup {
    Table,
    Id,
    GroupName,
    GroupType,
    LdapGroupDn,
    CreationTime,
    UpdateTime,
}
