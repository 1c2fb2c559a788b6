use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        catalog::{CatalogEntryDto, DeleteCatalogEntryDto, UpdateCatalogEntryDto},
    },
    server::{error::Error, model::app::AppState, service::catalog::CatalogService},
};

pub static CATALOG_TAG: &str = "catalog";

/// Merge changes into the description of a catalog entry
///
/// A `parish_input` field is resolved against the parish table and stored as
/// `parish_id` and `parish_name`. List fields given as comma separated text are split.
#[utoipa::path(
    post,
    path = "/api/catalog/update",
    tag = CATALOG_TAG,
    request_body = UpdateCatalogEntryDto,
    responses(
        (status = 200, description = "Entry updated", body = CatalogEntryDto),
        (status = 400, description = "Invalid body or malformed entry ID", body = ErrorDto),
        (status = 404, description = "Entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_catalog_entry(
    State(state): State<AppState>,
    payload: Result<Json<UpdateCatalogEntryDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(request) = payload?;
    let catalog_service = CatalogService::new(&state.db, &state.images);

    let data = catalog_service.update(request).await?;

    Ok((StatusCode::OK, Json(CatalogEntryDto { data })).into_response())
}

/// Delete a catalog entry along with its stored image
#[utoipa::path(
    post,
    path = "/api/catalog/delete",
    tag = CATALOG_TAG,
    request_body = DeleteCatalogEntryDto,
    responses(
        (status = 204, description = "Entry deleted"),
        (status = 400, description = "Invalid body or malformed entry ID", body = ErrorDto),
        (status = 404, description = "Entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_catalog_entry(
    State(state): State<AppState>,
    payload: Result<Json<DeleteCatalogEntryDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(request) = payload?;
    let catalog_service = CatalogService::new(&state.db, &state.images);

    catalog_service.delete(&request.id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
