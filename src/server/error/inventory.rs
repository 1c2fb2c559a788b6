use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum InventoryError {
    /// The proposed inventory number was inserted concurrently by another request.
    #[error("Inventory number {0:?} is already taken")]
    SequenceTaken(String),
    /// Every reservation attempt collided with a concurrent allocation.
    #[error("Failed to reserve an inventory number with prefix {prefix:?} after {attempts} attempts")]
    ReservationExhausted { prefix: String, attempts: u32 },
}

impl IntoResponse for InventoryError {
    fn into_response(self) -> Response {
        tracing::warn!("Inventory allocation error: {}", self);

        error_response(
            StatusCode::CONFLICT,
            "Could not reserve an inventory number, please try again.",
        )
    }
}
