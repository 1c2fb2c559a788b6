//! Error types for the parish catalog server.
//!
//! This module provides the error handling system with specialized error types for each
//! domain (configuration, parish resolution, inventory allocation, catalog entries). All
//! errors implement `IntoResponse` for Axum HTTP responses and use `thiserror` for
//! `Display` and `Error` implementations.

pub mod catalog;
pub mod config;
pub mod inventory;
pub mod parish;
pub mod retry;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        catalog::CatalogError, config::ConfigError, inventory::InventoryError,
        parish::ParishError,
    },
};

/// Main error type for the parish catalog server.
///
/// Aggregates all domain-specific error types and external library errors into a single
/// error type. `#[from]` conversions allow the `?` operator throughout services and
/// repositories, and the `IntoResponse` implementation maps each variant to an HTTP
/// response for API consumers.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables, unreadable reference data).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Parish resolution error (missing input, parish not found).
    #[error(transparent)]
    ParishError(#[from] ParishError),
    /// Inventory number allocation error (sequence conflicts, exhausted retries).
    #[error(transparent)]
    InventoryError(#[from] InventoryError),
    /// Catalog entry error (invalid ID, missing entry, invalid image path).
    #[error(transparent)]
    CatalogError(#[from] CatalogError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Filesystem error (image store, reference data, reports).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    /// JSON serialization or deserialization error.
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    /// Request body missing, not JSON, or not matching the expected shape.
    #[error("Invalid request body: {}", .0.body_text())]
    RequestBodyError(#[from] JsonRejection),
}

/// Converts application errors into HTTP responses.
///
/// Domain errors carry their own status mapping; everything else is treated as an
/// internal server error (500) and logged.
///
/// # Returns
/// - 400 Bad Request - Missing parish input, malformed catalog entry ID, invalid request body
/// - 404 Not Found - Parish or catalog entry not found
/// - 409 Conflict - Inventory number could not be reserved
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ParishError(err) => err.into_response(),
            Self::InventoryError(err) => err.into_response(),
            Self::CatalogError(err) => err.into_response(),
            Self::RequestBodyError(err) => error_response(StatusCode::BAD_REQUEST, err.body_text()),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON error response with the provided status and message.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
