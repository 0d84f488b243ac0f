//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::{config::Config, model::command::EnablePolicy};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `EnablePolicy` is `Copy`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for Discord API requests.
    ///
    /// Configured without redirects so requests only ever reach the Discord API host.
    pub http_client: reqwest::Client,

    /// Bot token used to authenticate Discord API requests.
    pub discord_bot_token: String,

    /// Base URL of the Discord REST API.
    pub discord_api_url: String,

    /// Whether command syncs may overwrite enabled flags the snapshot did not set.
    pub enable_policy: EnablePolicy,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for Discord API requests
    /// - `config` - Application configuration supplying Discord and sync settings
    pub fn new(db: DatabaseConnection, http_client: reqwest::Client, config: &Config) -> Self {
        Self {
            db,
            http_client,
            discord_bot_token: config.discord_bot_token.clone(),
            discord_api_url: config.discord_api_url.clone(),
            enable_policy: config.enable_policy,
        }
    }
}
