//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod command;
pub mod config;
pub mod discord;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{command::CommandError, config::ConfigError, discord::DiscordApiError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Domain-specific errors like `CommandError`
/// handle their own response mapping, while generic variants provide standard HTTP
/// status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Never retried; the process exits before serving requests.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Command sync, query, or administration error.
    ///
    /// Delegates to `CommandError::into_response()` for status code mapping.
    #[error(transparent)]
    CommandErr(#[from] CommandError),

    /// Discord REST API error.
    ///
    /// Delegates to `DiscordApiError::into_response()`, which passes the upstream
    /// status through.
    #[error(transparent)]
    DiscordErr(#[from] DiscordApiError),

    /// Database error from SeaORM outside of command operations (startup, migrations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client could not be built at startup.
    #[error(transparent)]
    HttpErr(#[from] reqwest::Error),

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - Variable - For `CommandErr` and `DiscordErr`, delegated to their own mapping
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::CommandErr(err) => err.into_response(),
            Self::DiscordErr(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid
/// leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                kind: "InternalError".to_string(),
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
