//! Database model type aliases.
//!
//! Short names for the SeaORM models of the `entity` crate used across services and
//! controllers.

/// Type alias for the parish database model.
///
/// # Fields (from `entity::parish::Model`)
/// - `id` - Primary key, parish UUID
/// - `name` - Parish name as registered by the diocese
/// - `location` - Town or city the parish belongs to
/// - `diocese` - Diocese the parish belongs to
pub type ParishModel = entity::parish::Model;

/// Type alias for the catalog item database model.
///
/// Catalog items are unique per `(parish_id, inventory_number)`. Freshly allocated
/// inventory numbers are held by a `draft` item until the object is catalogued.
pub type CatalogItemModel = entity::catalog_item::Model;

/// Type alias for the conversation database model.
///
/// The `response` column holds the catalog entry produced for the conversation as JSON text.
pub type ConversationModel = entity::conversation::Model;
