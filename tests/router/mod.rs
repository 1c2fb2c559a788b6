//! Tests for the HTTP router, sending requests through the full Axum stack.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use parish_catalog::server::router::routes;
use parish_catalog_test_utils::prelude::*;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::util::TestContextExt;

fn app(test: &TestContext, dir: &std::path::Path) -> Router {
    routes().with_state(test.into_app_state(dir))
}

/// Expect the parish listing to be served with query parameters
#[tokio::test]
async fn serves_parish_list() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_parish("Santiago Apóstol", "Guadix", "Guadix")
        .build()
        .await?;
    let dir = tempfile::tempdir()?;

    let resp = app(&test, dir.path())
        .oneshot(
            Request::builder()
                .uri("/api/parishes/list?q=santiago")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect inventory number generation to accept the Spanish category key
#[tokio::test]
async fn serves_inventory_number_generation() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await?;
    let dir = tempfile::tempdir()?;
    let parish = test.parish().insert_mock_parish("Santiago Apóstol").await?;

    let body = json!({"parish_name": "Santiago Apostol", "categoria": "Escultura"});
    let resp = app(&test, dir.path())
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/inventory-number/generate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    let items = test.catalog().get_items(parish.id).await?;
    assert_eq!(items.len(), 1);
    assert!(items[0].inventory_number.starts_with("SAP-"));
    assert!(items[0].inventory_number.ends_with("-ESC-001"));

    Ok(())
}

/// Expect the OpenAPI document to be served
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let dir = tempfile::tempdir()?;

    let resp = app(&test, dir.path())
        .oneshot(
            Request::builder()
                .uri("/api/docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect a malformed JSON body to be answered with a JSON 400 error
#[tokio::test]
async fn rejects_malformed_body_with_json_error() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let dir = tempfile::tempdir()?;

    let resp = app(&test, dir.path())
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/inventory-number/generate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"parish_name\": "))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes)?;
    assert!(body["error"].is_string());

    Ok(())
}

/// Expect a body sent without a JSON content type to be answered with a JSON 400 error
#[tokio::test]
async fn rejects_body_without_content_type() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let dir = tempfile::tempdir()?;

    let resp = app(&test, dir.path())
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/catalog/delete")
                .body(Body::from("id=1"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes)?;
    assert!(body["error"].is_string());

    Ok(())
}
