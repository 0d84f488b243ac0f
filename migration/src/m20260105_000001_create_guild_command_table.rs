use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildCommand::Table)
                    .if_not_exists()
                    .col(string(GuildCommand::GuildId))
                    .col(string(GuildCommand::CommandName))
                    .col(boolean(GuildCommand::IsEnabled).default(true))
                    .col(big_integer(GuildCommand::UsageCount).default(0))
                    .col(string_null(GuildCommand::Category))
                    .col(timestamp_with_time_zone(GuildCommand::UpdatedAt))
                    .primary_key(
                        Index::create()
                            .name("pk_guild_command")
                            .col(GuildCommand::GuildId)
                            .col(GuildCommand::CommandName),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_guild_command_guild_id")
                    .table(GuildCommand::Table)
                    .col(GuildCommand::GuildId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildCommand::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildCommand {
    Table,
    GuildId,
    CommandName,
    IsEnabled,
    UsageCount,
    Category,
    UpdatedAt,
}
