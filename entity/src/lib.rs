//! SeaORM entities for the guildboard database schema.

pub mod prelude;

pub mod guild_command;
