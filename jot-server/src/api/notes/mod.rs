pub mod create_notes_request;
pub mod note_list_response;
pub mod notes;
