//! Tests for the list_parishes endpoint.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use parish_catalog::{model::parish::ParishListQuery, server::controller::parish::list_parishes};

use super::*;

/// Expect 200 OK listing the configured diocese sorted without regard to accents
#[tokio::test]
async fn success_with_default_diocese() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_parish("Santiago Apóstol", "Guadix", "Guadix")
        .with_parish("Ángeles Custodios", "Baza", "Guadix")
        .with_parish("San Pedro", "Almería", "Almería")
        .build()
        .await?;
    let dir = tempfile::tempdir()?;

    let result = list_parishes(
        State(test.into_app_state(dir.path())),
        Query(ParishListQuery {
            diocese: Some(" ".to_string()),
            q: None,
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let names: Vec<&str> = body["parishes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|parish| parish["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Ángeles Custodios", "Santiago Apóstol"]);

    Ok(())
}

/// Expect 200 OK filtering on location with an accent-free query
#[tokio::test]
async fn success_with_search_query() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_parish("San Pedro", "Almería", "Almería")
        .with_parish("Santa María", "Vera", "Almería")
        .build()
        .await?;
    let dir = tempfile::tempdir()?;

    let result = list_parishes(
        State(test.into_app_state(dir.path())),
        Query(ParishListQuery {
            diocese: Some("Almería".to_string()),
            q: Some("ALMERIA".to_string()),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let parishes = body["parishes"].as_array().unwrap();
    assert_eq!(parishes.len(), 1);
    assert_eq!(parishes[0]["name"], "San Pedro");

    Ok(())
}

/// Expect 500 Internal Server Error when the parish table is missing
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let dir = tempfile::tempdir()?;

    let result = list_parishes(
        State(test.into_app_state(dir.path())),
        Query(ParishListQuery::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
