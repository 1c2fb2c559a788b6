//! Server application core modules.
//!
//! This module contains the server-side functionality of the parish catalog: HTTP routing,
//! parish name resolution, inventory number allocation, catalog entry maintenance and the
//! item import run by the `import-items` binary.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
