//! Session cookie extractors for the browser-facing routes.

use crate::WebError;

use nb_auth::{SESSION_COOKIE, Session};
use nb_ws::AppState;

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;

/// The session-authenticated caller. Rejects with 401 when the cookie is
/// missing, unknown, or expired.
pub struct SessionUser(pub Session);

/// Like [`SessionUser`] but without the rejection; `None` is anonymous.
pub struct MaybeSession(pub Option<Session>);

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = WebError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = cookie_value(parts, SESSION_COOKIE).ok_or_else(WebError::not_logged_in)?;
        let session = state
            .sessions
            .get(&token)
            .await
            .ok_or_else(WebError::not_logged_in)?;

        Ok(SessionUser(session))
    }
}

impl FromRequestParts<AppState> for MaybeSession {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = match cookie_value(parts, SESSION_COOKIE) {
            Some(token) => state.sessions.get(&token).await,
            None => None,
        };

        Ok(MaybeSession(session))
    }
}

/// Pick one cookie out of however many Cookie headers the client sent.
pub(crate) fn cookie_value(parts: &Parts, name: &str) -> Option<String> {
    parts.headers.get_all(COOKIE).iter().find_map(|header| {
        let header = header.to_str().ok()?;
        header.split(';').find_map(|pair| {
            let (key, value) = pair.trim().split_once('=')?;
            (key == name).then(|| value.to_string())
        })
    })
}

/// Set-Cookie value for a fresh login.
pub(crate) fn session_cookie(token: &str, max_age_secs: i64) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_secs}")
}

/// Set-Cookie value that drops the session cookie.
pub(crate) fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}
