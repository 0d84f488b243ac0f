use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::{
    model::{
        api::ErrorDto,
        command::{GuildCommandDto, SetCommandEnabledDto, SyncCommandsDto, SyncCommandsResultDto},
    },
    server::{
        error::{command::CommandError, AppError},
        model::command::{GuildCommand, SyncSummary},
        service::command::{CommandAdminService, CommandQueryService, CommandSyncService},
        state::AppState,
    },
};

pub static COMMAND_TAG: &str = "command";

#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/commands",
    tag = COMMAND_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Commands ordered by category, then name", body = Vec<GuildCommandDto>),
        (status = 400, description = "Guild ID is blank", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_commands(
    State(state): State<AppState>,
    Path(guild_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let commands: Vec<GuildCommandDto> = CommandQueryService::new(&state.db)
        .list_commands(&guild_id)
        .await?
        .into_iter()
        .map(|c| c.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(commands)))
}

/// Applies a command snapshot reported by the bot.
///
/// The body is taken as raw JSON so shape errors are reported with the offending
/// element instead of a generic deserialization message.
///
/// Once the batch is committed the request succeeds. The `commands` listing in the
/// response is read afterwards and is omitted if that read fails, so a 500 always
/// means nothing was applied.
#[utoipa::path(
    post,
    path = "/api/guilds/{guild_id}/commands/sync",
    tag = COMMAND_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID")
    ),
    request_body = SyncCommandsDto,
    responses(
        (status = 200, description = "Snapshot applied; returns the guild's commands after the sync when they could be read", body = SyncCommandsResultDto),
        (status = 400, description = "Malformed payload or blank guild ID", body = ErrorDto),
        (status = 500, description = "Snapshot could not be persisted; nothing was applied", body = ErrorDto)
    ),
)]
pub async fn sync_commands(
    State(state): State<AppState>,
    Path(guild_id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(invalid_body)?;

    let summary = CommandSyncService::new(&state.db, state.enable_policy)
        .synchronize(&guild_id, &payload)
        .await?;

    let listing = CommandQueryService::new(&state.db)
        .list_commands(&guild_id)
        .await;

    Ok((
        StatusCode::OK,
        Json(sync_result(&guild_id, summary, listing)),
    ))
}

/// Builds the sync response once the batch is committed.
///
/// A failed read of the listing no longer says anything about the sync itself, so it
/// is logged and the listing is left out instead of failing the request.
fn sync_result(
    guild_id: &str,
    summary: SyncSummary,
    listing: Result<Vec<GuildCommand>, CommandError>,
) -> SyncCommandsResultDto {
    let commands = match listing {
        Ok(commands) => Some(commands.into_iter().map(|c| c.into_dto()).collect()),
        Err(e) => {
            tracing::error!(
                "Synced commands for guild {} but failed to list them: {}",
                guild_id,
                e
            );
            None
        }
    };

    SyncCommandsResultDto {
        success: true,
        synced: summary.records_affected,
        commands,
    }
}

fn invalid_body(rejection: JsonRejection) -> CommandError {
    CommandError::InvalidPayloadKind(rejection.body_text())
}

#[utoipa::path(
    patch,
    path = "/api/guilds/{guild_id}/commands/by-name/{name}",
    tag = COMMAND_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID"),
        ("name" = String, Path, description = "Command name")
    ),
    request_body = SetCommandEnabledDto,
    responses(
        (status = 200, description = "Successfully updated command", body = GuildCommandDto),
        (status = 400, description = "Malformed body or blank guild ID", body = ErrorDto),
        (status = 404, description = "Command not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_command_enabled(
    State(state): State<AppState>,
    Path((guild_id, name)): Path<(String, String)>,
    payload: Result<Json<SetCommandEnabledDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(invalid_body)?;

    let command = CommandAdminService::new(&state.db)
        .set_enabled(&guild_id, &name, payload.enabled)
        .await?;

    Ok((StatusCode::OK, Json(command.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/guilds/{guild_id}/commands/by-name/{name}/reset-usage",
    tag = COMMAND_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID"),
        ("name" = String, Path, description = "Command name")
    ),
    responses(
        (status = 200, description = "Usage counter reset to zero", body = GuildCommandDto),
        (status = 400, description = "Blank guild ID", body = ErrorDto),
        (status = 404, description = "Command not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_command_usage(
    State(state): State<AppState>,
    Path((guild_id, name)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let command = CommandAdminService::new(&state.db)
        .reset_usage(&guild_id, &name)
        .await?;

    Ok((StatusCode::OK, Json(command.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/guilds/{guild_id}/commands/by-name/{name}/usage",
    tag = COMMAND_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID"),
        ("name" = String, Path, description = "Command name")
    ),
    responses(
        (status = 200, description = "Invocation recorded", body = GuildCommandDto),
        (status = 400, description = "Blank guild ID", body = ErrorDto),
        (status = 404, description = "Command not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn record_command_usage(
    State(state): State<AppState>,
    Path((guild_id, name)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let command = CommandAdminService::new(&state.db)
        .record_usage(&guild_id, &name)
        .await?;

    Ok((StatusCode::OK, Json(command.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/guilds/{guild_id}/commands/by-name/{name}",
    tag = COMMAND_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID"),
        ("name" = String, Path, description = "Command name")
    ),
    responses(
        (status = 204, description = "Successfully deleted command"),
        (status = 400, description = "Blank guild ID", body = ErrorDto),
        (status = 404, description = "Command not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_command(
    State(state): State<AppState>,
    Path((guild_id, name)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    CommandAdminService::new(&state.db)
        .remove(&guild_id, &name)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
