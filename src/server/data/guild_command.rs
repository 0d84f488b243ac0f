//! Guild command repository for database operations.
//!
//! This module provides the `GuildCommandRepository` for the `guild_command` table.
//! Every write is keyed on the composite `(guild_id, command_name)` primary key, and
//! batch upserts run inside a single transaction so a sync is applied entirely or
//! not at all.
//!
//! All methods return domain models at the repository boundary, converting SeaORM
//! entity models internally.

use chrono::{DateTime, Utc};
use migration::OnConflict;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    TransactionTrait,
};

use crate::server::model::command::{CommandBatch, CommandUpsert, GuildCommand};

use entity::guild_command::{ActiveModel, Column};

/// Conflict update keeping the larger of the stored and incoming usage counters.
///
/// Evaluated by the store per row, so concurrent syncs cannot lower a counter.
/// Refers to the existing row by its bare table name, which holds because the
/// generated `INSERT` never aliases the target table. Postgres and SQLite both
/// resolve `guild_command.<column>` and `excluded.<column>` in `DO UPDATE SET`.
const KEEP_GREATER_USAGE_COUNT: &str = "CASE WHEN excluded.usage_count > guild_command.usage_count \
     THEN excluded.usage_count ELSE guild_command.usage_count END";

/// Keeps statements under SQLite's bound parameter limit.
const MAX_ROWS_PER_STATEMENT: usize = 500;

/// Repository providing database operations for per-guild command state.
pub struct GuildCommandRepository<'a> {
    /// Database connection for executing queries.
    db: &'a DatabaseConnection,
}

impl<'a> GuildCommandRepository<'a> {
    /// Creates a new repository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection for executing queries
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Applies a reconciled batch as one transactional conditional upsert.
    ///
    /// New commands are inserted with the batch values. Existing commands always get
    /// `updated_at` refreshed and `usage_count` raised to the incoming value if it is
    /// greater; `is_enabled` and `category` are only overwritten for upserts flagged to
    /// do so. Rows are grouped by those flags because a statement carries a single
    /// `ON CONFLICT` clause. Any failure rolls the whole batch back.
    ///
    /// # Arguments
    /// - `batch` - Reconciled upserts with unique command names
    ///
    /// # Returns
    /// - `Ok(())` - Every upsert in the batch was applied
    /// - `Err(DbErr)` - Nothing was applied
    pub async fn upsert_batch(&self, batch: &CommandBatch) -> Result<(), DbErr> {
        if batch.is_empty() {
            return Ok(());
        }

        let mut groups: Vec<((bool, bool), Vec<ActiveModel>)> = Vec::new();
        for upsert in &batch.upserts {
            let key = (upsert.overwrite_enabled, upsert.overwrite_category);
            let model = active_model(&batch.guild_id, batch.reconciled_at, upsert);

            match groups.iter_mut().find(|(group_key, _)| *group_key == key) {
                Some((_, models)) => models.push(model),
                None => groups.push((key, vec![model])),
            }
        }

        let txn = self.db.begin().await?;

        for ((overwrite_enabled, overwrite_category), models) in groups {
            for chunk in models.chunks(MAX_ROWS_PER_STATEMENT) {
                entity::prelude::GuildCommand::insert_many(chunk.to_vec())
                    .on_conflict(on_conflict(overwrite_enabled, overwrite_category))
                    .exec_without_returning(&txn)
                    .await?;
            }
        }

        txn.commit().await
    }

    /// Gets all commands stored for a guild, in no particular order.
    ///
    /// # Returns
    /// - `Ok(Vec<GuildCommand>)` - Commands for the guild (empty if none)
    /// - `Err(DbErr)` - Database error during query or a corrupt stored counter
    pub async fn get_by_guild(&self, guild_id: &str) -> Result<Vec<GuildCommand>, DbErr> {
        entity::prelude::GuildCommand::find()
            .filter(Column::GuildId.eq(guild_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(GuildCommand::from_entity)
            .collect()
    }

    /// Finds a single command by its composite key.
    ///
    /// # Returns
    /// - `Ok(Some(GuildCommand))` - Command found
    /// - `Ok(None)` - The guild has no record of this command
    /// - `Err(DbErr)` - Database error during query
    pub async fn find(
        &self,
        guild_id: &str,
        command_name: &str,
    ) -> Result<Option<GuildCommand>, DbErr> {
        entity::prelude::GuildCommand::find()
            .filter(key(guild_id, command_name))
            .one(self.db)
            .await?
            .map(GuildCommand::from_entity)
            .transpose()
    }

    /// Sets the administrator enable flag of a command.
    ///
    /// # Returns
    /// - `Ok(Some(GuildCommand))` - Updated command
    /// - `Ok(None)` - The guild has no record of this command
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_enabled(
        &self,
        guild_id: &str,
        command_name: &str,
        enabled: bool,
        now: DateTime<Utc>,
    ) -> Result<Option<GuildCommand>, DbErr> {
        self.update_one(
            guild_id,
            command_name,
            Column::IsEnabled,
            Expr::value(enabled),
            now,
        )
        .await
    }

    /// Resets a command's usage counter to zero.
    ///
    /// This is the only write that lowers a counter.
    pub async fn reset_usage(
        &self,
        guild_id: &str,
        command_name: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<GuildCommand>, DbErr> {
        self.update_one(
            guild_id,
            command_name,
            Column::UsageCount,
            Expr::value(0i64),
            now,
        )
        .await
    }

    /// Atomically increments a command's usage counter by one.
    pub async fn increment_usage(
        &self,
        guild_id: &str,
        command_name: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<GuildCommand>, DbErr> {
        self.update_one(
            guild_id,
            command_name,
            Column::UsageCount,
            Expr::col(Column::UsageCount).add(1),
            now,
        )
        .await
    }

    /// Deletes a command record.
    ///
    /// # Returns
    /// - `Ok(true)` - Record deleted
    /// - `Ok(false)` - The guild has no record of this command
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn delete(&self, guild_id: &str, command_name: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::GuildCommand::delete_many()
            .filter(key(guild_id, command_name))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn update_one(
        &self,
        guild_id: &str,
        command_name: &str,
        column: Column,
        value: Expr,
        now: DateTime<Utc>,
    ) -> Result<Option<GuildCommand>, DbErr> {
        let result = entity::prelude::GuildCommand::update_many()
            .col_expr(column, value)
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(key(guild_id, command_name))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find(guild_id, command_name).await
    }
}

fn key(guild_id: &str, command_name: &str) -> Condition {
    Condition::all()
        .add(Column::GuildId.eq(guild_id))
        .add(Column::CommandName.eq(command_name))
}

fn active_model(guild_id: &str, now: DateTime<Utc>, upsert: &CommandUpsert) -> ActiveModel {
    ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        command_name: ActiveValue::Set(upsert.command_name.clone()),
        is_enabled: ActiveValue::Set(upsert.is_enabled),
        usage_count: ActiveValue::Set(upsert.usage_count),
        category: ActiveValue::Set(upsert.category.clone()),
        updated_at: ActiveValue::Set(now),
    }
}

fn on_conflict(overwrite_enabled: bool, overwrite_category: bool) -> OnConflict {
    let mut update_columns = vec![Column::UpdatedAt];

    if overwrite_enabled {
        update_columns.push(Column::IsEnabled);
    }
    if overwrite_category {
        update_columns.push(Column::Category);
    }

    OnConflict::columns([Column::GuildId, Column::CommandName])
        .update_columns(update_columns)
        .value(Column::UsageCount, Expr::cust(KEEP_GREATER_USAGE_COUNT))
        .to_owned()
}
