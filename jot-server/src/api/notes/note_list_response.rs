use jot_core::Note;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct NoteListResponse {
    pub notes: Vec<Note>,
}
