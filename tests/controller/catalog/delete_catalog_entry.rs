//! Tests for the delete_catalog_entry endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use parish_catalog::{
    model::catalog::DeleteCatalogEntryDto, server::controller::catalog::delete_catalog_entry,
};
use serde_json::json;

use super::*;

fn request(id: &str) -> Result<Json<DeleteCatalogEntryDto>, JsonRejection> {
    Ok(Json(DeleteCatalogEntryDto { id: id.to_string() }))
}

/// Expect 204 No Content with the entry and its image removed
#[tokio::test]
async fn success_removes_entry_and_image() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await?;
    let dir = tempfile::tempdir()?;
    std::fs::create_dir_all(dir.path().join("images/2024"))?;
    let image = dir.path().join("images/2024/caliz.jpg");
    std::fs::write(&image, b"jpeg")?;
    let conversation = test
        .catalog()
        .insert_conversation_json(&json!({"tipo_objeto": "Cáliz", "image_path": "2024/caliz.jpg"}))
        .await?;

    let result = delete_catalog_entry(
        State(test.into_app_state(dir.path())),
        request(&conversation.id.to_string()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    assert!(test.catalog().get_conversation(conversation.id).await?.is_none());
    assert!(!image.exists());

    Ok(())
}

/// Expect 204 No Content when the referenced image is already gone
#[tokio::test]
async fn success_with_missing_image() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await?;
    let dir = tempfile::tempdir()?;
    let conversation = test
        .catalog()
        .insert_conversation_json(&json!({"image_path": "missing.jpg"}))
        .await?;

    let result = delete_catalog_entry(
        State(test.into_app_state(dir.path())),
        request(&conversation.id.to_string()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}

/// Expect 404 Not Found for an entry that does not exist
#[tokio::test]
async fn not_found_for_missing_entry() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let dir = tempfile::tempdir()?;

    let result = delete_catalog_entry(
        State(test.into_app_state(dir.path())),
        request(&uuid::Uuid::new_v4().to_string()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
