//! Tests for the update_catalog_entry endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use parish_catalog::{
    model::catalog::UpdateCatalogEntryDto, server::controller::catalog::update_catalog_entry,
};
use serde_json::{json, Map};

use super::*;

fn request(id: &str, changes: Value) -> Result<Json<UpdateCatalogEntryDto>, JsonRejection> {
    let changes = match changes {
        Value::Object(changes) => changes,
        _ => Map::new(),
    };

    Ok(Json(UpdateCatalogEntryDto {
        id: id.to_string(),
        changes,
    }))
}

/// Expect 200 OK with the merged entry and the parish input resolved
#[tokio::test]
async fn success_with_parish_input() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await?;
    let dir = tempfile::tempdir()?;
    let parish = test.parish().insert_mock_parish("Santiago Apóstol").await?;
    let conversation = test
        .catalog()
        .insert_conversation_json(&json!({"tipo_objeto": "Cáliz"}))
        .await?;

    let result = update_catalog_entry(
        State(test.into_app_state(dir.path())),
        request(
            &conversation.id.to_string(),
            json!({"parish_input": "Santiago Apóstol", "materiales": "plata, oro"}),
        ),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["data"]["tipo_objeto"], "Cáliz");
    assert_eq!(body["data"]["parish_id"], parish.id.to_string().as_str());
    assert_eq!(body["data"]["parish_name"], "Santiago Apóstol");
    assert_eq!(body["data"]["materiales"], json!(["plata", "oro"]));
    assert!(body["data"].get("parish_input").is_none());

    Ok(())
}

/// Expect 400 Bad Request for an entry ID that is not a UUID
#[tokio::test]
async fn bad_request_for_invalid_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let dir = tempfile::tempdir()?;

    let result = update_catalog_entry(
        State(test.into_app_state(dir.path())),
        request("entry-1", json!({"autor": "Anónimo"})),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 Not Found for an entry that does not exist
#[tokio::test]
async fn not_found_for_missing_entry() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let dir = tempfile::tempdir()?;

    let result = update_catalog_entry(
        State(test.into_app_state(dir.path())),
        request(&uuid::Uuid::new_v4().to_string(), json!({"autor": "Anónimo"})),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
