use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::current_user::CurrentUser;
use crate::api::issues::{create_issues_request::CreateIssuesRequest, issue_list_response::IssueListResponse};
use crate::state::AppState;

use jot_core::Issue;
use jot_db::IssueRepository;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

const LIST_LIMIT: i64 = 100;

pub async fn create_issues(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(request): Json<CreateIssuesRequest>,
) -> ApiResult<impl IntoResponse> {
    if request.items.is_empty() {
        return Err(ApiError::validation("At least one item is required"));
    }

    let issues: Vec<Issue> = request
        .items
        .into_iter()
        .map(|d| Issue::from_draft(current.user_id, d))
        .collect();

    IssueRepository::new(state.pool.clone())
        .create_many(&issues)
        .await?;

    Ok((StatusCode::CREATED, Json(json!({ "count": issues.len() }))))
}

pub async fn list_issues(
    State(state): State<AppState>,
    current: CurrentUser,
) -> ApiResult<impl IntoResponse> {
    let issues = IssueRepository::new(state.pool.clone())
        .list_by_user(current.user_id, LIST_LIMIT)
        .await?;

    Ok(Json(IssueListResponse { issues }))
}
