//! Data transfer objects exchanged over the HTTP API.
//!
//! These types define the JSON contract with the dashboard frontend and the bot
//! process. Server-side domain models convert into these at the controller boundary.

pub mod api;
pub mod command;
pub mod discord;
