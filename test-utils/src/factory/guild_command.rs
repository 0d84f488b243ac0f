//! Guild command factory for creating test command state entities.
//!
//! This module provides factory methods for creating `guild_command` rows with
//! sensible defaults. The factory supports customization through a builder pattern
//! so tests can seed stored state (disabled commands, existing usage counters)
//! before exercising a sync.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guild commands with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild_command::GuildCommandFactory;
///
/// let command = GuildCommandFactory::new(&db, "g1")
///     .command_name("ping")
///     .enabled(false)
///     .usage_count(10)
///     .build()
///     .await?;
/// ```
pub struct GuildCommandFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    command_name: String,
    is_enabled: bool,
    usage_count: i64,
    category: Option<String>,
    updated_at: DateTime<Utc>,
}

impl<'a> GuildCommandFactory<'a> {
    /// Creates a new GuildCommandFactory with default values.
    ///
    /// Defaults:
    /// - command_name: `"command_{id}"` where id is auto-incremented
    /// - is_enabled: `true`
    /// - usage_count: `0`
    /// - category: `None`
    /// - updated_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `guild_id` - Guild the command belongs to
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: guild_id.into(),
            command_name: format!("command_{}", id),
            is_enabled: true,
            usage_count: 0,
            category: None,
            updated_at: Utc::now(),
        }
    }

    /// Sets the command name.
    pub fn command_name(mut self, command_name: impl Into<String>) -> Self {
        self.command_name = command_name.into();
        self
    }

    /// Sets whether the command is enabled.
    pub fn enabled(mut self, is_enabled: bool) -> Self {
        self.is_enabled = is_enabled;
        self
    }

    /// Sets the stored usage counter.
    pub fn usage_count(mut self, usage_count: i64) -> Self {
        self.usage_count = usage_count;
        self
    }

    /// Sets the display category.
    pub fn category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    /// Sets the last write timestamp.
    pub fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = updated_at;
        self
    }

    /// Builds and inserts the guild command entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild_command::Model)` - Created guild command entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild_command::Model, DbErr> {
        entity::guild_command::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            command_name: ActiveValue::Set(self.command_name),
            is_enabled: ActiveValue::Set(self.is_enabled),
            usage_count: ActiveValue::Set(self.usage_count),
            category: ActiveValue::Set(self.category),
            updated_at: ActiveValue::Set(self.updated_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild command with default values.
///
/// Shorthand for `GuildCommandFactory::new(db, guild_id).build().await`.
pub async fn create_guild_command(
    db: &DatabaseConnection,
    guild_id: &str,
) -> Result<entity::guild_command::Model, DbErr> {
    GuildCommandFactory::new(db, guild_id).build().await
}
