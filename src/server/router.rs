//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, and Swagger UI
//! is served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/inventory-number/generate` - Reserve the next inventory number for a parish
/// - `GET /api/parishes/list` - List parishes of a diocese
/// - `POST /api/parishes/reference/reload` - Reload parish reference data from disk
/// - `POST /api/catalog/update` - Merge changes into a catalog entry
/// - `POST /api/catalog/delete` - Delete a catalog entry and its image
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let app_state = startup::build_app_state(&config).await?;
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Parish Catalog", description = "Parish heritage catalog API"),
        tags(
            (name = controller::inventory::INVENTORY_TAG, description = "Inventory number allocation"),
            (name = controller::parish::PARISH_TAG, description = "Parish listing and reference data"),
            (name = controller::catalog::CATALOG_TAG, description = "Catalog entry maintenance"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::inventory::generate_inventory_number))
        .routes(routes!(controller::parish::list_parishes))
        .routes(routes!(controller::parish::reload_reference))
        .routes(routes!(controller::catalog::update_catalog_entry))
        .routes(routes!(controller::catalog::delete_catalog_entry))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
