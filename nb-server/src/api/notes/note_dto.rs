use nb_core::Note;

use serde::Serialize;

/// Note shape for JSON serialization, shared by the gateway and the
/// session routes.
#[derive(Debug, Serialize)]
pub struct NoteDto {
    pub id: i64,
    pub title: String,
    pub text: String,
    pub date_added: String,
}

impl From<Note> for NoteDto {
    fn from(n: Note) -> Self {
        Self {
            id: n.id,
            title: n.title,
            text: n.text,
            date_added: n.date_added.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}
