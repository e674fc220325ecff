//! Account settings and profile picture handlers.
//!
//! Pictures live in external object storage under a per-user key; the
//! session's provider token is the bearer credential for both directions.

use crate::MessageResponse;
use crate::web::error::{Result as WebResult, WebError};
use crate::web::messages;
use crate::web::session::SessionUser;

use nb_db::UserRepository;
use nb_storage::profile_pic_key;
use nb_ws::AppState;

use axum::{
    Json,
    extract::{Multipart, State},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub email: String,
    pub api_key: String,
    pub total_requests: i64,
}

/// GET /settings
pub async fn settings(
    State(state): State<AppState>,
    SessionUser(session): SessionUser,
) -> WebResult<Json<SettingsResponse>> {
    // The session user row can only be missing if the database was swapped
    // out from under a live session; treat that like a dead session.
    let user = UserRepository::new(state.pool.clone())
        .find_by_id(session.user_id)
        .await?
        .ok_or_else(WebError::not_logged_in)?;

    Ok(Json(SettingsResponse {
        email: user.email,
        api_key: user.api_key,
        total_requests: user.total_requests,
    }))
}

/// POST /settings (multipart field `profile_pic`)
pub async fn upload_profile_pic(
    State(state): State<AppState>,
    SessionUser(session): SessionUser,
    mut multipart: Multipart,
) -> WebResult<Json<MessageResponse>> {
    let mut picture: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| WebError::bad_upload(e.to_string()))?
    {
        if field.name() == Some("profile_pic") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| WebError::bad_upload(e.to_string()))?;
            picture = Some(bytes.to_vec());
        }
    }

    let Some(picture) = picture else {
        return Err(WebError::bad_upload("missing profile_pic field"));
    };
    if picture.is_empty() {
        return Err(WebError::bad_upload("empty profile_pic upload"));
    }

    state
        .storage
        .upload(&profile_pic_key(session.user_id), picture, &session.id_token)
        .await?;

    Ok(Json(MessageResponse::new(messages::PICTURE_UPLOADED)))
}

/// GET /download_profile_pic
pub async fn download_profile_pic(
    State(state): State<AppState>,
    SessionUser(session): SessionUser,
) -> WebResult<Response> {
    let bytes = state
        .storage
        .download(&profile_pic_key(session.user_id), &session.id_token)
        .await?;

    Ok(([(CONTENT_TYPE, "image/jpeg")], bytes).into_response())
}
