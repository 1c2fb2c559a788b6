//! SeaORM entities for the parish catalog schema.

pub mod prelude;

pub mod catalog_item;
pub mod conversation;
pub mod parish;
