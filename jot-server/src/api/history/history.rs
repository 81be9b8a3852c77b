use crate::api::error::Result as ApiResult;
use crate::api::extractors::current_user::CurrentUser;
use crate::api::history::history_response::HistoryResponse;
use crate::state::AppState;

use jot_db::{EventRepository, IssueRepository, NoteRepository, TaskRepository};

use axum::{Json, extract::State, response::IntoResponse};

const PER_CATEGORY_LIMIT: i64 = 20;

pub async fn history(
    State(state): State<AppState>,
    current: CurrentUser,
) -> ApiResult<impl IntoResponse> {
    let user_id = current.user_id;

    let task_repo = TaskRepository::new(state.pool.clone());
    let event_repo = EventRepository::new(state.pool.clone());
    let issue_repo = IssueRepository::new(state.pool.clone());
    let note_repo = NoteRepository::new(state.pool.clone());

    let (tasks, events, issues, notes) = futures::join!(
        task_repo.list_by_user(user_id, PER_CATEGORY_LIMIT),
        event_repo.list_by_user(user_id, PER_CATEGORY_LIMIT),
        issue_repo.list_by_user(user_id, PER_CATEGORY_LIMIT),
        note_repo.list_by_user(user_id, PER_CATEGORY_LIMIT),
    );

    Ok(Json(HistoryResponse {
        tasks: tasks?,
        events: events?,
        issues: issues?,
        notes: notes?,
    }))
}
