//! Data access layer repositories.
//!
//! This module contains the database repositories and the image store. Repositories
//! wrap sea-orm queries for a single table and return `DbErr` untouched so services
//! decide how failures are handled.

pub mod catalog_item;
pub mod conversation;
pub mod image;
pub mod parish;
