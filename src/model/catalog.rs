use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Request body for updating the description stored for a catalog entry.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateCatalogEntryDto {
    pub id: String,
    /// Fields to merge into the stored description. A `parish_input` key is
    /// resolved to `parish_id`/`parish_name` instead of being stored.
    #[serde(default)]
    #[schema(value_type = Object)]
    pub changes: Map<String, Value>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CatalogEntryDto {
    /// The merged description as stored
    #[schema(value_type = Object)]
    pub data: Map<String, Value>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DeleteCatalogEntryDto {
    pub id: String,
}
