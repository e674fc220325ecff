//! Note handlers for session-cookie callers. Same owner scoping as the
//! gateway, with the Polish flash strings on the way out.

use crate::web::error::{Result as WebResult, WebError};
use crate::web::messages;
use crate::web::session::SessionUser;
use crate::{MessageResponse, NoteDto};

use nb_db::NoteRepository;
use nb_ws::AppState;

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct NoteForm {
    pub title: String,
    pub text: String,
}

/// POST /add
pub async fn add_note(
    State(state): State<AppState>,
    SessionUser(session): SessionUser,
    Json(form): Json<NoteForm>,
) -> WebResult<Json<NoteDto>> {
    let note = NoteRepository::new(state.pool.clone())
        .create(session.user_id, &form.title, &form.text)
        .await?;

    Ok(Json(note.into()))
}

/// POST /edit/:id
pub async fn edit_note(
    State(state): State<AppState>,
    SessionUser(session): SessionUser,
    Path(id): Path<i64>,
    Json(form): Json<NoteForm>,
) -> WebResult<Json<NoteDto>> {
    let note = NoteRepository::new(state.pool.clone())
        .update_for_user(id, session.user_id, &form.title, &form.text)
        .await?
        .ok_or_else(WebError::note_not_found)?;

    Ok(Json(note.into()))
}

/// POST /delete/:id
pub async fn delete_note(
    State(state): State<AppState>,
    SessionUser(session): SessionUser,
    Path(id): Path<i64>,
) -> WebResult<Json<MessageResponse>> {
    let deleted = NoteRepository::new(state.pool.clone())
        .delete_for_user(id, session.user_id)
        .await?;

    if !deleted {
        return Err(WebError::note_not_found());
    }

    Ok(Json(MessageResponse::new(messages::NOTE_DELETED)))
}
