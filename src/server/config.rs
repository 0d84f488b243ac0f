use crate::server::{
    error::{config::ConfigError, AppError},
    model::command::EnablePolicy,
};

const DISCORD_API_URL: &str = "https://discord.com/api/v10";
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub listen_addr: String,

    pub discord_bot_token: String,
    pub discord_api_url: String,

    /// Whether a sync may re-enable commands an administrator disabled.
    pub enable_policy: EnablePolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string()),
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            discord_api_url: DISCORD_API_URL.to_string(),
            enable_policy: match std::env::var("COMMAND_SYNC_ENABLE_POLICY") {
                Ok(value) => value.parse().map_err(|reason| ConfigError::InvalidValue {
                    var: "COMMAND_SYNC_ENABLE_POLICY".to_string(),
                    reason,
                })?,
                Err(_) => EnablePolicy::default(),
            },
        })
    }
}

/// Reads a required variable, treating blank values as missing.
fn required(var: &str) -> Result<String, ConfigError> {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnvVar(var.to_string())),
    }
}
