use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::current_user::CurrentUser;
use crate::api::tasks::{create_tasks_request::CreateTasksRequest, task_list_response::TaskListResponse};
use crate::state::AppState;

use jot_core::Task;
use jot_db::TaskRepository;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

const LIST_LIMIT: i64 = 100;

pub async fn create_tasks(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(request): Json<CreateTasksRequest>,
) -> ApiResult<impl IntoResponse> {
    if request.items.is_empty() {
        return Err(ApiError::validation("At least one item is required"));
    }

    let tasks: Vec<Task> = request
        .items
        .into_iter()
        .map(|d| Task::from_draft(current.user_id, d))
        .collect();

    TaskRepository::new(state.pool.clone())
        .create_many(&tasks)
        .await?;

    Ok((StatusCode::CREATED, Json(json!({ "count": tasks.len() }))))
}

pub async fn list_tasks(
    State(state): State<AppState>,
    current: CurrentUser,
) -> ApiResult<impl IntoResponse> {
    let tasks = TaskRepository::new(state.pool.clone())
        .list_by_user(current.user_id, LIST_LIMIT)
        .await?;

    Ok(Json(TaskListResponse { tasks }))
}
