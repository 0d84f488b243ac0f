//! Explicit administrator actions on single command records.
//!
//! These are the only writes allowed to lower a usage counter or delete a record;
//! sync never does either.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::guild_command::GuildCommandRepository,
    error::command::CommandError,
    model::command::GuildCommand,
    service::command::require_guild_id,
};

pub struct CommandAdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommandAdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Enables or disables a command for a guild.
    ///
    /// # Returns
    /// - `Ok(GuildCommand)` - Updated command
    /// - `Err(CommandError::CommandNotFound)` - The guild has no record of the command
    pub async fn set_enabled(
        &self,
        guild_id: &str,
        command_name: &str,
        enabled: bool,
    ) -> Result<GuildCommand, CommandError> {
        require_guild_id(guild_id)?;

        let command = GuildCommandRepository::new(self.db)
            .set_enabled(guild_id, command_name, enabled, Utc::now())
            .await?
            .ok_or_else(|| not_found(guild_id, command_name))?;

        tracing::info!(
            "Command '{}' in guild {} set to {}",
            command_name,
            guild_id,
            if enabled { "enabled" } else { "disabled" }
        );

        Ok(command)
    }

    /// Resets a command's usage counter to zero.
    pub async fn reset_usage(
        &self,
        guild_id: &str,
        command_name: &str,
    ) -> Result<GuildCommand, CommandError> {
        require_guild_id(guild_id)?;

        let command = GuildCommandRepository::new(self.db)
            .reset_usage(guild_id, command_name, Utc::now())
            .await?
            .ok_or_else(|| not_found(guild_id, command_name))?;

        tracing::info!(
            "Reset usage count of command '{}' in guild {}",
            command_name,
            guild_id
        );

        Ok(command)
    }

    /// Records one invocation of a command reported by the bot.
    ///
    /// The increment is a single atomic update, so concurrent events are never lost.
    /// Unknown commands are not created; they appear once a snapshot reports them.
    pub async fn record_usage(
        &self,
        guild_id: &str,
        command_name: &str,
    ) -> Result<GuildCommand, CommandError> {
        require_guild_id(guild_id)?;

        GuildCommandRepository::new(self.db)
            .increment_usage(guild_id, command_name, Utc::now())
            .await?
            .ok_or_else(|| not_found(guild_id, command_name))
    }

    /// Removes a command record and its usage history.
    pub async fn remove(&self, guild_id: &str, command_name: &str) -> Result<(), CommandError> {
        require_guild_id(guild_id)?;

        let deleted = GuildCommandRepository::new(self.db)
            .delete(guild_id, command_name)
            .await?;

        if !deleted {
            return Err(not_found(guild_id, command_name));
        }

        tracing::info!("Removed command '{}' from guild {}", command_name, guild_id);

        Ok(())
    }
}

fn not_found(guild_id: &str, command_name: &str) -> CommandError {
    CommandError::CommandNotFound {
        guild_id: guild_id.to_string(),
        command_name: command_name.to_string(),
    }
}
