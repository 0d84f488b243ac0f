use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

pub const UPSTREAM_API_FAILURE: &str = "UpstreamAPIFailure";

/// Errors from calls to the Discord REST API.
#[derive(Error, Debug)]
pub enum DiscordApiError {
    /// Discord answered with a non-success status.
    ///
    /// The upstream status code is passed through to the client unchanged.
    #[error("Discord API responded with status {status}: {detail}")]
    UpstreamApiFailure {
        /// HTTP status returned by Discord
        status: u16,
        /// Response body or reason phrase
        detail: String,
    },

    /// The request never produced a response (connection, TLS, decoding).
    ///
    /// Results in a 502 Bad Gateway.
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

impl IntoResponse for DiscordApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            Self::UpstreamApiFailure { status, detail } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                detail,
            ),
            Self::Request(err) => {
                tracing::error!("Discord API request failed: {}", err);
                (
                    StatusCode::BAD_GATEWAY,
                    "Failed to reach the Discord API".to_string(),
                )
            }
        };

        (
            status,
            Json(ErrorDto {
                kind: UPSTREAM_API_FAILURE.to_string(),
                error,
            }),
        )
            .into_response()
    }
}
