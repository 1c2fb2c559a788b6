//! Request and response types shared by the HTTP API.

pub mod api;
pub mod catalog;
pub mod inventory;
pub mod parish;
