//! Usage counter middleware.
//!
//! Every request carrying a resolvable `api_key` bumps the owner's
//! `total_requests` and stamps `last_request_at` before the inner handler
//! runs, whatever that handler later returns. Unknown keys are left for
//! the gateway's own 401; counter failures are logged and never
//! short-circuit the request.

use nb_db::UserRepository;
use nb_ws::AppState;

use axum::extract::{Query, Request, State};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;
use log::warn;
use serde::Deserialize;

#[derive(Deserialize)]
struct ApiKeyQuery {
    api_key: Option<String>,
}

pub async fn track_usage(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if let Ok(Query(query)) = Query::<ApiKeyQuery>::try_from_uri(request.uri())
        && let Some(api_key) = query.api_key
    {
        let users = UserRepository::new(state.pool.clone());

        match users.find_by_api_key(&api_key).await {
            Ok(Some(user)) => {
                if let Err(e) = users.record_request(user.id, Utc::now()).await {
                    warn!("Failed to record api usage for user {}: {e}", user.id);
                }
            }
            Ok(None) => {}
            Err(e) => warn!("Api key lookup failed in usage counter: {e}"),
        }
    }

    next.run(request).await
}
