//! Error types for the Gamehub server application.
//!
//! This module provides the unified error handling system for the server.
//! All errors implement `IntoResponse` for Axum HTTP responses and use
//! `thiserror` for ergonomic error definitions with automatic `Display` and
//! `Error` trait implementations.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{error::config::ConfigError, model::api::ErrorDto};

/// Main error type for the Gamehub server application.
///
/// Aggregates domain-specific and external library errors into a single
/// unified type, using `thiserror`'s `#[from]` attribute so underlying errors
/// convert via the `?` operator. The `IntoResponse` implementation maps
/// errors to HTTP responses for API consumers.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Steam storefront error (unknown app id, transport failure).
    #[error(transparent)]
    SteamError(#[from] steam::Error),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
    /// I/O error (binding or serving the HTTP listener).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// A Steam not-found maps to 404 so catalog pages can distinguish a bad id
/// from an outage; everything else is treated as an internal server error
/// with logging.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::SteamError(steam::Error::NotFound(app_id)) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: format!("Game {} not found", app_id),
                }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// Logs the error message and returns a generic "Internal server error"
/// message to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
