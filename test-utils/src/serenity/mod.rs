//! Test factories for Discord API payloads and Serenity objects.
//!
//! Discord user lookups are deserialized into Serenity's `User`. These factories build
//! the JSON Discord's REST API would return, and the matching Serenity struct, so tests
//! can serve the payload from a stub upstream and compare against the parsed result.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::user::{create_test_user, test_user_json};
//!
//! let payload = test_user_json(123456789, "tester", Some("Tester"));
//! let user = create_test_user(123456789, "tester", Some("Tester"));
//! assert_eq!(user.name, "tester");
//! ```
//!
//! # Available Factories
//!
//! - `user::test_user_json` - Raw Discord user object
//! - `user::create_test_user` - Serenity User object

pub mod user;

pub use user::{create_test_user, test_user_json};
