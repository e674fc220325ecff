use crate::WebError;
use crate::web::messages;

use nb_auth::ProviderError;
use nb_storage::StorageError;

use std::panic::Location;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use error_location::ErrorLocation;
use http_body_util::BodyExt;

fn location() -> ErrorLocation {
    ErrorLocation::from(Location::caller())
}

async fn body_message(response: Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    json["message"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_not_logged_in_maps_to_401() {
    let response = WebError::not_logged_in().into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_message(response).await, messages::LOGIN_REQUIRED);
}

#[tokio::test]
async fn test_password_mismatch_maps_to_400() {
    let response = WebError::passwords_do_not_match().into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_message(response).await, messages::PASSWORDS_DO_NOT_MATCH);
}

#[tokio::test]
async fn test_rate_limited_maps_to_429() {
    let error = WebError::from(ProviderError::RateLimited {
        location: location(),
    });
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body_message(response).await, messages::TOO_MANY_ATTEMPTS);
}

#[tokio::test]
async fn test_email_exists_maps_to_409() {
    let error = WebError::from(ProviderError::EmailExists {
        location: location(),
    });
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_message(response).await, messages::EMAIL_TAKEN);
}

#[tokio::test]
async fn test_bad_credentials_map_to_401() {
    let error = WebError::from(ProviderError::InvalidCredentials {
        location: location(),
    });
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_message(response).await, messages::BAD_CREDENTIALS);
}

#[tokio::test]
async fn test_unknown_email_maps_to_404() {
    let error = WebError::from(ProviderError::EmailNotFound {
        location: location(),
    });
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_message(response).await, messages::EMAIL_NOT_FOUND);
}

#[tokio::test]
async fn test_unexpected_provider_code_maps_to_502() {
    let error = WebError::from(ProviderError::UnexpectedStatus {
        status: 400,
        code: "OPERATION_NOT_ALLOWED".into(),
        location: location(),
    });
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(body_message(response).await, messages::GENERIC_ERROR);
}

#[tokio::test]
async fn test_missing_picture_maps_to_404() {
    let error = WebError::from(StorageError::NotFound {
        key: "images/profile_pic_1.jpg".into(),
        location: location(),
    });
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_message(response).await, messages::GENERIC_ERROR);
}

#[tokio::test]
async fn test_note_not_found_uses_polish_message() {
    let response = WebError::note_not_found().into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_message(response).await, messages::NOTE_NOT_FOUND);
}
