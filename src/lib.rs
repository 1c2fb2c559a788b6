//! Parish heritage catalog backend.
//!
//! Resolves free-text parish names against the diocese's parish records and
//! allocates sequential inventory numbers for cataloged objects.

pub mod model;
pub mod server;
