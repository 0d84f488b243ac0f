use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors raised by command sync, queries, and administration.
///
/// Client errors are raised before the store is touched. `StorePersistenceFailure`
/// means the whole batch was rolled back; no partial sync is ever visible.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The payload has no `commands` array, or an element of it is malformed.
    ///
    /// Results in a 400 Bad Request with the detail returned to the client.
    #[error("Invalid command payload: {0}")]
    InvalidPayloadKind(String),

    /// The guild identifier is absent or blank.
    ///
    /// Results in a 400 Bad Request.
    #[error("Guild identifier is missing")]
    MissingGuildIdentifier,

    /// The store rejected a read or write.
    ///
    /// Results in a 500 Internal Server Error. The cause is logged server-side and
    /// a generic message is returned to the client.
    #[error("Failed to persist command state: {0}")]
    StorePersistenceFailure(#[source] DbErr),

    /// An administrator action targeted a command the guild has no record of.
    ///
    /// Results in a 404 Not Found.
    #[error("Command '{command_name}' not found in guild {guild_id}")]
    CommandNotFound {
        guild_id: String,
        command_name: String,
    },
}

impl CommandError {
    /// Machine-readable kind reported in error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidPayloadKind(_) => "InvalidPayloadKind",
            Self::MissingGuildIdentifier => "MissingGuildIdentifier",
            Self::StorePersistenceFailure(_) => "StorePersistenceFailure",
            Self::CommandNotFound { .. } => "CommandNotFound",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidPayloadKind(_) | Self::MissingGuildIdentifier => StatusCode::BAD_REQUEST,
            Self::CommandNotFound { .. } => StatusCode::NOT_FOUND,
            Self::StorePersistenceFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DbErr> for CommandError {
    fn from(err: DbErr) -> Self {
        Self::StorePersistenceFailure(err)
    }
}

/// Converts command errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `InvalidPayloadKind` and `MissingGuildIdentifier`
/// - 404 Not Found - For `CommandNotFound`
/// - 500 Internal Server Error - For `StorePersistenceFailure`, with the cause logged
impl IntoResponse for CommandError {
    fn into_response(self) -> Response {
        let status = self.status();
        let kind = self.kind().to_string();

        let error = match &self {
            Self::StorePersistenceFailure(source) => {
                tracing::error!("Command store failure: {}", source);
                "Failed to persist command state".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(ErrorDto { kind, error })).into_response()
    }
}
