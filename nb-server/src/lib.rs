pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod web;

pub use api::{
    error::{ApiError, Result as ApiResult},
    extractors::api_user::ApiUser,
    message_response::MessageResponse,
    notes::{
        create_note_request::CreateNoteRequest,
        note_dto::NoteDto,
        note_list_response::NoteListResponse,
        notes::{create_note, delete_note, get_note, list_notes, update_note},
        update_note_request::UpdateNoteRequest,
    },
};

pub use web::{
    auth::{
        AuthStatusResponse, ForgotPasswordRequest, IndexResponse, LoginRequest, LoginResponse,
        SignupRequest,
    },
    error::{Result as WebResult, WebError},
    notes::NoteForm,
    session::{MaybeSession, SessionUser},
    settings::SettingsResponse,
};

pub use crate::routes::build_router;
