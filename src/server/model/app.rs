use sea_orm::DatabaseConnection;

use crate::server::{
    data::image::ImageStore, service::inventory::InventorySettings,
    service::parish::reference::ReferenceStore,
};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Parish reference catalog and aliases used for name resolution
    pub reference: ReferenceStore,
    pub inventory: InventorySettings,
    pub images: ImageStore,
    /// Diocese listed when a request does not name one
    pub default_diocese: String,
}
