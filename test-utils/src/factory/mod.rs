//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let command = factory::create_guild_command(&db, "g1").await?;
//!
//!     // Customize with the builder
//!     let disabled = factory::guild_command::GuildCommandFactory::new(&db, "g1")
//!         .command_name("ban")
//!         .enabled(false)
//!         .usage_count(10)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `guild_command` - Create per-guild command state entities
//! - `helpers` - Unique id generation shared by factories

pub mod guild_command;
pub mod helpers;

pub use guild_command::create_guild_command;
