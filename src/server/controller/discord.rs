use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, discord::DiscordUserDto},
    server::{error::AppError, service::discord::DiscordUserService, state::AppState},
};

pub static DISCORD_TAG: &str = "discord";

/// Looks up a Discord user with the bot's credentials.
///
/// Failed lookups answer with Discord's own status code.
#[utoipa::path(
    get,
    path = "/api/discord/users/{user_id}",
    tag = DISCORD_TAG,
    params(
        ("user_id" = u64, Path, description = "Discord user ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user", body = DiscordUserDto),
        (status = 404, description = "Unknown user", body = ErrorDto),
        (status = 502, description = "Discord API unreachable", body = ErrorDto)
    ),
)]
pub async fn get_discord_user(
    State(state): State<AppState>,
    Path(user_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let user = DiscordUserService::new(
        &state.http_client,
        &state.discord_api_url,
        &state.discord_bot_token,
    )
    .get_user(user_id)
    .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
