//! Session auth flow: index, login, signup, password reset, logout.
//!
//! These are JSON endpoints over the same control flow the original HTML
//! forms drove. Login only opens a session once the provider reports the
//! email verified; until then the account sits in the pending state and
//! every login attempt re-sends the verification mail.

use crate::web::error::{Result as WebResult, WebError};
use crate::web::messages;
use crate::web::session::{MaybeSession, clear_session_cookie, session_cookie};
use crate::{MessageResponse, NoteDto};

use nb_core::{AuthState, User};
use nb_db::{NoteRepository, UserRepository};
use nb_ws::AppState;

use axum::{
    Json,
    extract::State,
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use log::info;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<NoteDto>>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub state: AuthState,
    pub email: String,
    pub display_name: String,
}

/// Flash message plus the auth state the caller ended up in.
#[derive(Debug, Serialize)]
pub struct AuthStatusResponse {
    pub state: AuthState,
    pub message: String,
}

impl AuthStatusResponse {
    pub fn new(state: AuthState, message: impl Into<String>) -> Self {
        Self {
            state,
            message: message.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub password2: String,
}

#[derive(Debug, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// GET /
///
/// Anonymous callers get `authenticated: false`; a live session also
/// returns the caller's identity and notes.
pub async fn index(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
) -> WebResult<Json<IndexResponse>> {
    let Some(session) = session else {
        return Ok(Json(IndexResponse {
            authenticated: false,
            email: None,
            display_name: None,
            notes: None,
        }));
    };

    let notes = NoteRepository::new(state.pool.clone())
        .list_for_user(session.user_id)
        .await?;

    Ok(Json(IndexResponse {
        authenticated: true,
        email: Some(session.email),
        display_name: Some(session.display_name),
        notes: Some(notes.into_iter().map(NoteDto::from).collect()),
    }))
}

/// POST /
///
/// Log in against the identity provider. Verified accounts get a session
/// cookie; unverified ones get the verification mail again and no cookie.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> WebResult<Response> {
    let token = state
        .provider
        .sign_in(&request.email, &request.password)
        .await?;
    let account = state.provider.get_account_info(&token.id_token).await?;

    if !account.email_verified {
        state
            .provider
            .send_verification_email(&token.id_token)
            .await?;

        return Ok(Json(AuthStatusResponse::new(
            AuthState::PendingVerification,
            messages::VERIFY_EMAIL,
        ))
        .into_response());
    }

    let user = resolve_local_user(&state, &token.email).await?;
    let session = state.sessions.create(&user, &token.id_token).await;
    let cookie = session_cookie(&session.token, state.sessions.ttl_secs());

    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(LoginResponse {
            state: AuthState::Authenticated,
            email: session.email,
            display_name: session.display_name,
        }),
    )
        .into_response())
}

/// POST /signup
///
/// Register with the provider, send the verification mail, and create the
/// local user row with a fresh api key.
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> WebResult<Json<AuthStatusResponse>> {
    if request.password != request.password2 {
        return Err(WebError::passwords_do_not_match());
    }

    let token = state
        .provider
        .sign_up(&request.email, &request.password)
        .await?;
    state
        .provider
        .send_verification_email(&token.id_token)
        .await?;

    let user = resolve_local_user(&state, &token.email).await?;
    info!("Registered user {} ({})", user.id, user.display_name());

    Ok(Json(AuthStatusResponse::new(
        AuthState::PendingVerification,
        messages::ACCOUNT_CREATED,
    )))
}

/// POST /forgot
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(request): Json<ForgotPasswordRequest>,
) -> WebResult<Json<MessageResponse>> {
    state.provider.send_password_reset(&request.email).await?;

    Ok(Json(MessageResponse::new(messages::RESET_EMAIL_SENT)))
}

/// GET /logout
///
/// Drop the session (if any), expire the cookie, and bounce to /.
pub async fn logout(
    State(state): State<AppState>,
    MaybeSession(session): MaybeSession,
) -> Response {
    if let Some(session) = session {
        state.sessions.remove(&session.token).await;
        info!("Logged out {}", session.email);
    }

    (
        AppendHeaders([(SET_COOKIE, clear_session_cookie())]),
        Redirect::to("/"),
    )
        .into_response()
}

/// Find the local row for a provider account, creating it on first
/// contact (signup, or login against a rebuilt database).
async fn resolve_local_user(state: &AppState, email: &str) -> WebResult<User> {
    let users = UserRepository::new(state.pool.clone());

    if let Some(user) = users.find_by_email(email).await? {
        return Ok(user);
    }

    let user = users.create(email, &nb_auth::generate_api_key()).await?;
    info!("Created local user {} for provider account", user.id);

    Ok(user)
}
