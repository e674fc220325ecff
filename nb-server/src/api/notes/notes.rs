//! Note REST handlers for api-key callers.
//!
//! Every lookup is scoped to the key's owner, so a foreign note id is
//! indistinguishable from a missing one.

use crate::api::extractors::api_user::ApiUser;
use crate::{
    ApiError, ApiResult, CreateNoteRequest, MessageResponse, NoteDto, NoteListResponse,
    UpdateNoteRequest,
};

use nb_db::NoteRepository;
use nb_ws::AppState;

use axum::{
    Json,
    extract::{Path, State},
};

// =============================================================================
// Handlers
// =============================================================================

/// GET /notes
///
/// List the caller's notes, oldest first
pub async fn list_notes(
    State(state): State<AppState>,
    ApiUser(user): ApiUser,
) -> ApiResult<Json<NoteListResponse>> {
    let repo = NoteRepository::new(state.pool.clone());
    let notes = repo.list_for_user(user.id).await?;

    Ok(Json(NoteListResponse {
        notes: notes.into_iter().map(NoteDto::from).collect(),
    }))
}

/// POST /notes
///
/// Create a note for the caller and echo it back
pub async fn create_note(
    State(state): State<AppState>,
    ApiUser(user): ApiUser,
    Json(request): Json<CreateNoteRequest>,
) -> ApiResult<Json<NoteDto>> {
    let repo = NoteRepository::new(state.pool.clone());
    let note = repo.create(user.id, &request.title, &request.text).await?;

    Ok(Json(note.into()))
}

/// GET /notes/:id
pub async fn get_note(
    State(state): State<AppState>,
    ApiUser(user): ApiUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<NoteDto>> {
    let repo = NoteRepository::new(state.pool.clone());
    let note = repo
        .find_for_user(id, user.id)
        .await?
        .ok_or_else(ApiError::not_found)?;

    Ok(Json(note.into()))
}

/// PUT /notes/:id
pub async fn update_note(
    State(state): State<AppState>,
    ApiUser(user): ApiUser,
    Path(id): Path<i64>,
    Json(request): Json<UpdateNoteRequest>,
) -> ApiResult<Json<NoteDto>> {
    let repo = NoteRepository::new(state.pool.clone());
    let note = repo
        .update_for_user(id, user.id, &request.title, &request.text)
        .await?
        .ok_or_else(ApiError::not_found)?;

    Ok(Json(note.into()))
}

/// DELETE /notes/:id
pub async fn delete_note(
    State(state): State<AppState>,
    ApiUser(user): ApiUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    let repo = NoteRepository::new(state.pool.clone());

    if !repo.delete_for_user(id, user.id).await? {
        return Err(ApiError::not_found());
    }

    Ok(Json(MessageResponse::new("Note deleted!")))
}
