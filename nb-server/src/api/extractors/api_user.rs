//! Axum extractors for REST gateway authentication

use crate::ApiError;

use nb_core::User;
use nb_db::UserRepository;
use nb_ws::AppState;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;

/// The gateway caller, resolved from the `api_key` query parameter.
///
/// A missing or unknown key rejects the request with 401 before the
/// handler runs.
pub struct ApiUser(pub User);

#[derive(Deserialize)]
struct ApiKeyQuery {
    api_key: Option<String>,
}

impl FromRequestParts<AppState> for ApiUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<ApiKeyQuery>::try_from_uri(&parts.uri)
            .map_err(|_| ApiError::unauthorized())?;

        let Some(api_key) = query.api_key else {
            return Err(ApiError::unauthorized());
        };

        let users = UserRepository::new(state.pool.clone());
        let user = users.find_by_api_key(&api_key).await?;

        user.map(ApiUser).ok_or_else(ApiError::unauthorized)
    }
}
