use sea_orm::DatabaseConnection;
use std::cmp::Ordering;

use crate::server::{
    data::guild_command::GuildCommandRepository,
    error::command::CommandError,
    model::command::GuildCommand,
    service::command::require_guild_id,
};

/// Read-side access to a guild's commands for the dashboard.
pub struct CommandQueryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommandQueryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a guild's commands in display order.
    ///
    /// Ordered by category, with missing or empty categories last, then by command
    /// name. Both comparisons are case-sensitive byte order and happen here rather
    /// than in SQL, so the order does not depend on database collation.
    ///
    /// # Returns
    /// - `Ok(Vec<GuildCommand>)` - Ordered commands, empty if the guild has none
    /// - `Err(CommandError::MissingGuildIdentifier)` - Blank guild id
    /// - `Err(CommandError::StorePersistenceFailure)` - Database error during query
    pub async fn list_commands(&self, guild_id: &str) -> Result<Vec<GuildCommand>, CommandError> {
        require_guild_id(guild_id)?;

        let mut commands = GuildCommandRepository::new(self.db)
            .get_by_guild(guild_id)
            .await?;

        sort_for_display(&mut commands);

        Ok(commands)
    }
}

pub fn sort_for_display(commands: &mut [GuildCommand]) {
    commands.sort_by(|a, b| {
        compare_categories(a.display_category(), b.display_category())
            .then_with(|| a.command_name.cmp(&b.command_name))
    });
}

fn compare_categories(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
