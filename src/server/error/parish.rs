use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum ParishError {
    /// Neither a parish ID nor a parish name was supplied.
    #[error("Either a parish ID or a parish name is required")]
    MissingInput,
    /// Every resolution strategy was exhausted without a match.
    #[error("No parish matches {0:?}")]
    NotFound(String),
}

impl IntoResponse for ParishError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingInput => {
                tracing::debug!("Parish resolution error: {}", Self::MissingInput);

                error_response(StatusCode::BAD_REQUEST, "parish_id or parish_name is required")
            }
            Self::NotFound(input) => {
                tracing::debug!("Parish resolution error: {}", Self::NotFound(input));

                error_response(StatusCode::NOT_FOUND, "Parish not found")
            }
        }
    }
}
