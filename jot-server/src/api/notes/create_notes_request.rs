use jot_core::NoteDraft;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateNotesRequest {
    pub items: Vec<NoteDraft>,
}
