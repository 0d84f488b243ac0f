use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{command, discord, health},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "guildboard", description = "Per-guild Discord bot command administration"),
    tags(
        (name = "command", description = "Command sync, listing and administration"),
        (name = "discord", description = "Discord API lookups"),
        (name = "health", description = "Liveness")
    )
)]
struct ApiDoc;

/// Builds the API router with OpenAPI docs served at `/api/docs`.
pub fn router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(command::list_commands))
        .routes(routes!(command::sync_commands))
        .routes(routes!(command::set_command_enabled, command::delete_command))
        .routes(routes!(command::reset_command_usage))
        .routes(routes!(command::record_command_usage))
        .routes(routes!(discord::get_discord_user))
        .routes(routes!(health::health))
        .split_for_parts();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
        .layer(cors)
        .with_state(state)
}
