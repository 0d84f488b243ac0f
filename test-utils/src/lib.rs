//! Guildboard Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the guildboard
//! application. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **factory**: Builders for inserting entities with sensible defaults
//! - **serenity**: Discord API payloads and Serenity objects built from JSON
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::GuildCommand;
//!
//! #[tokio::test]
//! async fn test_command_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(GuildCommand)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
