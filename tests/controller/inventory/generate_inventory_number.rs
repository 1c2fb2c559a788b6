//! Tests for the generate_inventory_number endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{Datelike, Utc};
use parish_catalog::{
    model::inventory::GenerateInventoryNumberDto,
    server::controller::inventory::generate_inventory_number,
};

use super::*;

fn request(
    parish_id: Option<&str>,
    parish_name: Option<&str>,
    category: Option<&str>,
) -> Result<Json<GenerateInventoryNumberDto>, JsonRejection> {
    Ok(Json(GenerateInventoryNumberDto {
        parish_id: parish_id.map(str::to_string),
        parish_name: parish_name.map(str::to_string),
        category: category.map(str::to_string),
    }))
}

/// Expect 200 OK with the first number of a parish resolved by name
#[tokio::test]
async fn success_with_parish_name() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await?;
    let dir = tempfile::tempdir()?;
    let parish = test
        .parish()
        .insert_mock_parish("San Juan Nepomuceno")
        .await?;

    let result = generate_inventory_number(
        State(test.into_app_state(dir.path())),
        request(None, Some("san juan nepomuceno"), Some("Pintura")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let expected = format!("SJN-{}-PIN-001", Utc::now().year());
    let body = body_json(resp).await;
    assert_eq!(body["inventory_number"], expected.as_str());

    let items = test.catalog().get_items(parish.id).await?;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].inventory_number, expected);

    Ok(())
}

/// Expect 200 OK continuing after the highest existing sequence of a parish ID
#[tokio::test]
async fn success_with_parish_id_after_existing_items() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await?;
    let dir = tempfile::tempdir()?;
    let parish = test.parish().insert_mock_parish("Santiago Apóstol").await?;
    let year = Utc::now().year();
    test.catalog()
        .insert_item(parish.id, &format!("SAP-{}-ORF-004", year))
        .await?;

    let parish_id = parish.id.to_string();
    let result = generate_inventory_number(
        State(test.into_app_state(dir.path())),
        request(Some(&parish_id), None, Some("Orfebrería")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(
        body["inventory_number"],
        format!("SAP-{}-ORF-005", year).as_str()
    );

    Ok(())
}

/// Expect 400 Bad Request when neither parish ID nor name is provided
#[tokio::test]
async fn bad_request_without_parish() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let dir = tempfile::tempdir()?;

    let result = generate_inventory_number(
        State(test.into_app_state(dir.path())),
        request(None, Some("   "), Some("Pintura")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 Not Found when the parish name matches nothing
#[tokio::test]
async fn not_found_for_unknown_parish_name() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await?;
    let dir = tempfile::tempdir()?;
    test.parish().insert_mock_parish("Santiago Apóstol").await?;

    let result = generate_inventory_number(
        State(test.into_app_state(dir.path())),
        request(None, Some("Nuestra Señora de las Angustias"), None),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 404 Not Found when the parish ID is not a UUID and no name is given
#[tokio::test]
async fn not_found_for_invalid_parish_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let dir = tempfile::tempdir()?;

    let result = generate_inventory_number(
        State(test.into_app_state(dir.path())),
        request(Some("not-a-uuid"), None, None),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 500 Internal Server Error when required tables are missing
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let dir = tempfile::tempdir()?;

    let result = generate_inventory_number(
        State(test.into_app_state(dir.path())),
        request(None, Some("Santiago Apóstol"), None),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}

/// Expect 409 Conflict with an error body when every reservation collides
#[tokio::test]
async fn conflict_when_every_reservation_collides() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_catalog_tables().build().await?;
    let dir = tempfile::tempdir()?;
    let parish = test
        .parish()
        .insert_mock_parish("San Juan Nepomuceno")
        .await?;
    test.catalog()
        .insert_item(parish.id, &format!("SJN-{}-ESC-001", Utc::now().year()))
        .await?;
    test.catalog().limit_to_one_item_per_parish().await?;

    let parish_id = parish.id.to_string();
    let result = generate_inventory_number(
        State(test.into_app_state(dir.path())),
        request(Some(&parish_id), None, Some("Pintura")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body = body_json(resp).await;
    assert_eq!(
        body["error"],
        "Could not reserve an inventory number, please try again."
    );

    Ok(())
}
