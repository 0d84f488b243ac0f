pub use super::guild_command::Entity as GuildCommand;
