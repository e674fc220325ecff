use crate::{IdentityProvider, ProviderError};

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn provider_against(server: &MockServer) -> IdentityProvider {
    IdentityProvider::new(&server.uri(), "test-key")
}

#[tokio::test]
async fn given_valid_credentials_when_signing_in_then_token_returned() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .and(query_param("key", "test-key"))
        .and(body_partial_json(json!({
            "email": "anna@example.com",
            "password": "secret123",
            "returnSecureToken": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "idToken": "id-token-1",
            "localId": "provider-uid-1",
            "email": "anna@example.com",
            "registered": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_against(&server).await;
    let token = provider
        .sign_in("anna@example.com", "secret123")
        .await
        .unwrap();

    assert_eq!(token.id_token, "id-token-1");
    assert_eq!(token.local_id, "provider-uid-1");
    assert_eq!(token.email, "anna@example.com");
}

#[tokio::test]
async fn given_email_exists_code_when_signing_up_then_email_exists_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:signUp"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "message": "EMAIL_EXISTS" }
        })))
        .mount(&server)
        .await;

    let provider = provider_against(&server).await;
    let result = provider.sign_up("anna@example.com", "secret123").await;

    assert!(matches!(result, Err(ProviderError::EmailExists { .. })));
}

#[tokio::test]
async fn given_code_with_trailing_explanation_when_signing_in_then_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "message": "TOO_MANY_ATTEMPTS_TRY_LATER : Try again later." }
        })))
        .mount(&server)
        .await;

    let provider = provider_against(&server).await;
    let result = provider.sign_in("anna@example.com", "secret123").await;

    assert!(matches!(result, Err(ProviderError::RateLimited { .. })));
}

#[tokio::test]
async fn given_invalid_password_code_when_signing_in_then_invalid_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "message": "INVALID_PASSWORD" }
        })))
        .mount(&server)
        .await;

    let provider = provider_against(&server).await;
    let result = provider.sign_in("anna@example.com", "wrong").await;

    assert!(matches!(result, Err(ProviderError::InvalidCredentials { .. })));
}

#[tokio::test]
async fn given_email_not_found_code_when_resetting_then_email_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:sendOobCode"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "message": "EMAIL_NOT_FOUND" }
        })))
        .mount(&server)
        .await;

    let provider = provider_against(&server).await;
    let result = provider.send_password_reset("nobody@example.com").await;

    assert!(matches!(result, Err(ProviderError::EmailNotFound { .. })));
}

#[tokio::test]
async fn given_unknown_code_when_signing_in_then_unexpected_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "message": "OPERATION_NOT_ALLOWED" }
        })))
        .mount(&server)
        .await;

    let provider = provider_against(&server).await;
    let result = provider.sign_in("anna@example.com", "secret123").await;

    match result {
        Err(ProviderError::UnexpectedStatus { status, code, .. }) => {
            assert_eq!(status, 400);
            assert_eq!(code, "OPERATION_NOT_ALLOWED");
        }
        other => panic!("expected UnexpectedStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn given_verification_request_then_request_type_and_token_posted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:sendOobCode"))
        .and(body_partial_json(json!({
            "requestType": "VERIFY_EMAIL",
            "idToken": "id-token-1"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "email": "anna@example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_against(&server).await;
    provider.send_verification_email("id-token-1").await.unwrap();
}

#[tokio::test]
async fn given_reset_request_then_request_type_and_email_posted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:sendOobCode"))
        .and(body_partial_json(json!({
            "requestType": "PASSWORD_RESET",
            "email": "anna@example.com"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "email": "anna@example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider_against(&server).await;
    provider.send_password_reset("anna@example.com").await.unwrap();
}

#[tokio::test]
async fn given_verified_account_when_looked_up_then_email_verified_true() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:lookup"))
        .and(body_partial_json(json!({ "idToken": "id-token-1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": [{
                "localId": "provider-uid-1",
                "email": "anna@example.com",
                "emailVerified": true
            }]
        })))
        .mount(&server)
        .await;

    let provider = provider_against(&server).await;
    let info = provider.get_account_info("id-token-1").await.unwrap();

    assert!(info.email_verified);
    assert_eq!(info.email, "anna@example.com");
}

#[tokio::test]
async fn given_empty_lookup_when_looked_up_then_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:lookup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "users": [] })))
        .mount(&server)
        .await;

    let provider = provider_against(&server).await;
    let result = provider.get_account_info("id-token-1").await;

    assert!(matches!(result, Err(ProviderError::Decode { .. })));
}
