use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ParishDto {
    pub id: Uuid,
    pub name: String,
    pub location: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ParishListDto {
    pub parishes: Vec<ParishDto>,
}

/// Query parameters accepted by the parish listing endpoint
#[derive(Clone, Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct ParishListQuery {
    /// Diocese to list, defaults to the configured diocese when absent or empty
    pub diocese: Option<String>,
    /// Accent and case insensitive search over parish name and location
    pub q: Option<String>,
}

/// Summary of the reference data currently used for parish name resolution
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ReferenceSummaryDto {
    pub catalog_entries: usize,
    pub aliases: usize,
}
