use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        inventory::{GenerateInventoryNumberDto, InventoryNumberDto},
    },
    server::{error::Error, model::app::AppState, service::inventory::InventoryService},
};

pub static INVENTORY_TAG: &str = "inventory";

/// Generate and reserve the next inventory number for a parish
///
/// The parish is resolved from `parish_id` when it is a valid UUID, otherwise from
/// `parish_name` using the reference catalog, aliases and fuzzy matching. The returned
/// number is reserved in the catalog so concurrent requests never receive the same one.
#[utoipa::path(
    post,
    path = "/api/inventory-number/generate",
    tag = INVENTORY_TAG,
    request_body = GenerateInventoryNumberDto,
    responses(
        (status = 200, description = "Inventory number reserved", body = InventoryNumberDto),
        (status = 400, description = "Invalid body, or neither parish_id nor parish_name provided", body = ErrorDto),
        (status = 404, description = "Parish could not be resolved", body = ErrorDto),
        (status = 409, description = "No free inventory number after retrying", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn generate_inventory_number(
    State(state): State<AppState>,
    payload: Result<Json<GenerateInventoryNumberDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(request) = payload?;
    let reference = state.reference.snapshot().await;
    let inventory_service = InventoryService::new(&state.db, &reference, &state.inventory);

    let inventory_number = inventory_service.generate(&request).await?;

    Ok((StatusCode::OK, Json(InventoryNumberDto { inventory_number })).into_response())
}
