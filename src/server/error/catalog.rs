use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use uuid::Uuid;

use crate::server::error::{error_response, InternalServerError};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid catalog entry ID: {0:?}")]
    InvalidId(String),
    #[error("Catalog entry {0} not found")]
    EntryNotFound(Uuid),
    #[error("Image path {0:?} is not a relative path inside the image store")]
    InvalidImagePath(String),
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidId(id) => {
                tracing::debug!("Catalog error: {}", Self::InvalidId(id));

                error_response(StatusCode::BAD_REQUEST, "A valid catalog entry ID is required")
            }
            Self::EntryNotFound(id) => {
                tracing::debug!("Catalog error: {}", Self::EntryNotFound(id));

                error_response(StatusCode::NOT_FOUND, "Catalog entry not found")
            }
            err => InternalServerError(err).into_response(),
        }
    }
}
