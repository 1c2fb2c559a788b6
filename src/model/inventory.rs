use serde::{Deserialize, Serialize};

/// Request body for generating the next inventory number of a parish.
///
/// At least one of `parish_id` or `parish_name` must be provided. When both are
/// present and `parish_id` is a valid UUID, the ID wins.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct GenerateInventoryNumberDto {
    pub parish_id: Option<String>,
    pub parish_name: Option<String>,
    /// Object category, e.g. "Pintura" or "Orfebrería"
    #[serde(alias = "categoria")]
    pub category: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct InventoryNumberDto {
    pub inventory_number: String,
}
