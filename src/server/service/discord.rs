use serde_json::Value;
use serenity::all::User;

use crate::server::{error::discord::DiscordApiError, model::discord::DiscordUser};

/// Service for looking up Discord users through the bot's REST credentials.
pub struct DiscordUserService<'a> {
    /// HTTP client for Discord API requests.
    http_client: &'a reqwest::Client,
    /// Base URL of the Discord REST API, without a trailing slash.
    api_url: &'a str,
    /// Bot token sent in the `Authorization` header.
    bot_token: &'a str,
}

impl<'a> DiscordUserService<'a> {
    /// Creates a new DiscordUserService instance.
    ///
    /// # Arguments
    /// - `http_client` - Reference to the HTTP client for Discord API requests
    /// - `api_url` - Base URL of the Discord REST API
    /// - `bot_token` - Bot token used to authenticate requests
    pub fn new(http_client: &'a reqwest::Client, api_url: &'a str, bot_token: &'a str) -> Self {
        Self {
            http_client,
            api_url,
            bot_token,
        }
    }

    /// Retrieves a Discord user by ID.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID (snowflake)
    ///
    /// # Returns
    /// - `Ok(DiscordUser)` - User profile returned by Discord
    /// - `Err(DiscordApiError::UpstreamApiFailure)` - Discord answered with a non-success
    ///   status; carries that status and Discord's error message
    /// - `Err(DiscordApiError::Request)` - No response, or the body was not a user
    pub async fn get_user(&self, user_id: u64) -> Result<DiscordUser, DiscordApiError> {
        let response = self
            .http_client
            .get(format!("{}/users/{}", self.api_url, user_id))
            .header("Authorization", format!("Bot {}", self.bot_token))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = error_message(&body).unwrap_or_else(|| {
                if body.is_empty() {
                    status.canonical_reason().unwrap_or("Unknown error").to_string()
                } else {
                    body
                }
            });

            tracing::warn!(
                "Discord user lookup for {} failed with status {}: {}",
                user_id,
                status,
                detail
            );

            return Err(DiscordApiError::UpstreamApiFailure {
                status: status.as_u16(),
                detail,
            });
        }

        let user = response.json::<User>().await?;

        Ok(DiscordUser::from_serenity(user))
    }
}

/// Extracts the `message` field from a Discord JSON error body.
fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}
