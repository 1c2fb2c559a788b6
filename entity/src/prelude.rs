pub use super::catalog_item::Entity as CatalogItem;
pub use super::conversation::Entity as Conversation;
pub use super::parish::Entity as Parish;
