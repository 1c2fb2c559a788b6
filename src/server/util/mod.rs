//! Utility functions and helpers for server operations.
//!
//! This module provides reusable helpers shared by services: text normalization and
//! edit-distance scoring used for parish name matching, and date/time helpers used by
//! inventory numbering and item import.

pub mod text;
pub mod time;
