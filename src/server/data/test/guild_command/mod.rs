use crate::server::{
    data::guild_command::GuildCommandRepository,
    model::command::{CommandBatch, CommandUpsert},
};
use chrono::{Duration, Utc};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod find;
mod get_by_guild;
mod increment_usage;
mod reset_usage;
mod set_enabled;
mod upsert_batch;

/// Upsert that inserts with the given values and overwrites nothing optional.
fn upsert(command_name: &str, usage_count: i64) -> CommandUpsert {
    CommandUpsert {
        command_name: command_name.to_string(),
        is_enabled: true,
        usage_count,
        category: None,
        overwrite_enabled: false,
        overwrite_category: false,
    }
}

fn batch(guild_id: &str, upserts: Vec<CommandUpsert>) -> CommandBatch {
    CommandBatch {
        guild_id: guild_id.to_string(),
        reconciled_at: Utc::now(),
        upserts,
    }
}
