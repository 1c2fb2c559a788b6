use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        parish::{ParishListDto, ParishListQuery, ReferenceSummaryDto},
    },
    server::{error::Error, model::app::AppState, service::parish::ParishService},
};

pub static PARISH_TAG: &str = "parish";

/// List the parishes of a diocese
///
/// Parishes are sorted by name ignoring accents and case. The optional `q` parameter
/// filters on name or location with the same folding.
#[utoipa::path(
    get,
    path = "/api/parishes/list",
    tag = PARISH_TAG,
    params(ParishListQuery),
    responses(
        (status = 200, description = "Parishes of the diocese", body = ParishListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_parishes(
    State(state): State<AppState>,
    Query(query): Query<ParishListQuery>,
) -> Result<impl IntoResponse, Error> {
    let parish_service = ParishService::new(&state.db);

    let diocese = match query.diocese.as_deref().map(str::trim) {
        Some(diocese) if !diocese.is_empty() => diocese,
        _ => state.default_diocese.as_str(),
    };

    let parishes = parish_service.list(diocese, query.q.as_deref()).await?;

    Ok((StatusCode::OK, Json(ParishListDto { parishes })).into_response())
}

/// Reload the parish reference catalog and alias table from disk
///
/// If the files cannot be read or parsed the previous reference data stays in use.
#[utoipa::path(
    post,
    path = "/api/parishes/reference/reload",
    tag = PARISH_TAG,
    responses(
        (status = 200, description = "Reference data reloaded", body = ReferenceSummaryDto),
        (status = 500, description = "Reference data could not be loaded", body = ErrorDto)
    ),
)]
pub async fn reload_reference(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let summary = state.reference.reload().await?;

    Ok((StatusCode::OK, Json(summary)).into_response())
}
