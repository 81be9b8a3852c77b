use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::current_user::CurrentUser;
use crate::api::notes::{create_notes_request::CreateNotesRequest, note_list_response::NoteListResponse};
use crate::state::AppState;

use jot_core::Note;
use jot_db::NoteRepository;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

const LIST_LIMIT: i64 = 100;

pub async fn create_notes(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(request): Json<CreateNotesRequest>,
) -> ApiResult<impl IntoResponse> {
    if request.items.is_empty() {
        return Err(ApiError::validation("At least one item is required"));
    }

    let notes: Vec<Note> = request
        .items
        .into_iter()
        .map(|d| Note::from_draft(current.user_id, d))
        .collect();

    NoteRepository::new(state.pool.clone())
        .create_many(&notes)
        .await?;

    Ok((StatusCode::CREATED, Json(json!({ "count": notes.len() }))))
}

pub async fn list_notes(
    State(state): State<AppState>,
    current: CurrentUser,
) -> ApiResult<impl IntoResponse> {
    let notes = NoteRepository::new(state.pool.clone())
        .list_by_user(current.user_id, LIST_LIMIT)
        .await?;

    Ok(Json(NoteListResponse { notes }))
}
