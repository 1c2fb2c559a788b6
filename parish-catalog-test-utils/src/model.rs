//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main parish-catalog crate to keep test code
//! consistent with application code.

/// Type alias for the parish database model.
pub type ParishModel = entity::parish::Model;

/// Type alias for the catalog item database model.
pub type CatalogItemModel = entity::catalog_item::Model;

/// Type alias for the conversation database model.
pub type ConversationModel = entity::conversation::Model;
