//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with an `AppState` built over an in-memory SQLite
//! database, and the status code of the resulting response is verified.

mod catalog;
mod inventory;
mod parish;

use axum::{body::to_bytes, response::Response};
use parish_catalog_test_utils::prelude::*;
use serde_json::Value;

use crate::util::TestContextExt;

/// Reads a response body as JSON
async fn body_json(resp: Response) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
