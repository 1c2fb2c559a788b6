//! Server-side model types.

pub mod app;
pub mod db;
