//! Test fixture modules for database record creation.
//!
//! - `parish` - Parish records
//! - `catalog` - Catalog items and the conversations holding catalog entries
//! - `factory` - In-memory models that need no database

pub mod catalog;
pub mod factory;
pub mod parish;
