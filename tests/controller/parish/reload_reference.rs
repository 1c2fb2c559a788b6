//! Tests for the reload_reference endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use parish_catalog::server::controller::parish::reload_reference;
use serde_json::json;

use crate::util::test_utils::reference_paths;

use super::*;

/// Expect 200 OK with counts of the reference data read from disk
#[tokio::test]
async fn success_with_reference_files() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let dir = tempfile::tempdir()?;
    let paths = reference_paths(dir.path());
    std::fs::write(
        &paths.catalog,
        json!([{"name": "Santiago Apóstol", "location": "Guadix"}]).to_string(),
    )?;
    std::fs::write(
        &paths.aliases,
        json!({"aliases": {"santiago": "Santiago Apóstol"}}).to_string(),
    )?;

    let state = test.into_app_state(dir.path());
    let result = reload_reference(State(state.clone())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["catalog_entries"], 1);
    assert!(body["aliases"].as_u64().unwrap() > 0);
    assert_eq!(
        state.reference.snapshot().await.alias("santiago"),
        Some("Santiago Apóstol")
    );

    Ok(())
}

/// Expect 500 Internal Server Error for a malformed catalog, keeping the old data
#[tokio::test]
async fn error_with_malformed_catalog() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let dir = tempfile::tempdir()?;
    let paths = reference_paths(dir.path());
    std::fs::write(&paths.catalog, "[{\"name\": ")?;

    let state = test.into_app_state(dir.path());
    let result = reload_reference(State(state.clone())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(state.reference.snapshot().await.summary().catalog_entries, 0);

    Ok(())
}
