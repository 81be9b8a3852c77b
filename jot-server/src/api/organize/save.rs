use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::current_user::CurrentUser;
use crate::api::organize::persister::save_result;
use crate::state::AppState;

use jot_core::OrganizeResult;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

/// Persist an (optionally user-edited) organize result. Sign-in only;
/// guests can classify but never save.
pub async fn save_organized(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(result): Json<OrganizeResult>,
) -> ApiResult<impl IntoResponse> {
    if result.is_empty() {
        return Err(ApiError::validation("Nothing to save"));
    }

    let report = save_result(&state.pool, current.user_id, result).await?;

    Ok((StatusCode::CREATED, Json(report)))
}
