use crate::ApiError;

use std::panic::Location;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http_body_util::BodyExt;

#[tokio::test]
async fn test_unauthorized_returns_401_with_json_body() {
    let response = ApiError::unauthorized().into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["message"], "Unauthorized api key");
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let response = ApiError::not_found().into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["message"], "Note not found");
}

#[tokio::test]
async fn test_store_error_returns_500_without_details() {
    let error = ApiError::Store {
        message: "UNIQUE constraint failed: users.email".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    // The constraint text must not leak to the client
    assert_eq!(json["message"], "Store failure");
}
