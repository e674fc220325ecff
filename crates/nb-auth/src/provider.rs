//! REST client for the Identity Toolkit accounts API.
//!
//! All operations are POSTs against `{base_url}/v1/accounts:{operation}`
//! with the browser API key as a query parameter. Error responses carry a
//! `{"error": {"message": CODE}}` body; the code string is mapped to a
//! typed [`ProviderError`].

use crate::{AccountInfo, ProviderError, ProviderToken, Result as ProviderResult};

use std::panic::Location;

use error_location::ErrorLocation;
use log::debug;
use reqwest::Client as ReqwestClient;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct IdentityProvider {
    base_url: String,
    api_key: String,
    http: ReqwestClient,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordCredentials<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OobCodeRequest<'a> {
    request_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    id_token: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
}

/// Body of sendOobCode responses; nothing in it is needed.
#[derive(Deserialize)]
struct OobCodeResponse {}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LookupRequest<'a> {
    id_token: &'a str,
}

#[derive(Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<AccountInfo>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

impl IdentityProvider {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Provider URL (hosted service or local emulator)
    /// * `api_key` - Browser API key passed on every call
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            http: ReqwestClient::new(),
        }
    }

    /// Exchange email and password for a token bundle.
    pub async fn sign_in(&self, email: &str, password: &str) -> ProviderResult<ProviderToken> {
        self.post(
            "signInWithPassword",
            &PasswordCredentials {
                email,
                password,
                return_secure_token: true,
            },
        )
        .await
    }

    /// Register a new account. The email starts out unverified.
    pub async fn sign_up(&self, email: &str, password: &str) -> ProviderResult<ProviderToken> {
        self.post(
            "signUp",
            &PasswordCredentials {
                email,
                password,
                return_secure_token: true,
            },
        )
        .await
    }

    /// Ask the provider to send a verification mail for a fresh token.
    pub async fn send_verification_email(&self, id_token: &str) -> ProviderResult<()> {
        let _: OobCodeResponse = self
            .post(
                "sendOobCode",
                &OobCodeRequest {
                    request_type: "VERIFY_EMAIL",
                    id_token: Some(id_token),
                    email: None,
                },
            )
            .await?;

        Ok(())
    }

    /// Ask the provider to mail a password reset link.
    pub async fn send_password_reset(&self, email: &str) -> ProviderResult<()> {
        let _: OobCodeResponse = self
            .post(
                "sendOobCode",
                &OobCodeRequest {
                    request_type: "PASSWORD_RESET",
                    id_token: None,
                    email: Some(email),
                },
            )
            .await?;

        Ok(())
    }

    /// Look up the account behind an id token, mainly for its
    /// email verification state.
    pub async fn get_account_info(&self, id_token: &str) -> ProviderResult<AccountInfo> {
        let response: LookupResponse = self.post("lookup", &LookupRequest { id_token }).await?;

        response
            .users
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::Decode {
                message: "lookup returned no users".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// POST one accounts operation and decode the response.
    async fn post<B, T>(&self, operation: &str, body: &B) -> ProviderResult<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = format!(
            "{}/v1/accounts:{}?key={}",
            self.base_url, operation, self.api_key
        );
        debug!("Provider call: accounts:{operation}");

        let response = self.http.post(&url).json(body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let code = match response.json::<ErrorBody>().await {
                Ok(body) => body.error.message,
                Err(_) => String::from("UNKNOWN"),
            };
            return Err(ProviderError::from_error_code(status.as_u16(), &code));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ProviderError::Decode {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
