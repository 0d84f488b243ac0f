use sea_orm::entity::prelude::*;

/// Per-guild state of a single bot command.
///
/// The composite primary key `(guild_id, command_name)` is also the conflict
/// target for every upsert against this table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guild_command")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub guild_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub command_name: String,
    pub is_enabled: bool,
    pub usage_count: i64,
    pub category: Option<String>,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
