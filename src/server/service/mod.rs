//! Service layer for business logic.
//!
//! This module contains the services that implement the catalog's business rules and
//! coordinate between repositories: parish name resolution and listing, inventory number
//! allocation with retry logic, catalog entry maintenance and the item import.

pub mod catalog;
pub mod import;
pub mod inventory;
pub mod parish;
pub mod retry;
