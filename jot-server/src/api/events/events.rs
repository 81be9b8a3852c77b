use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::events::{create_events_request::CreateEventsRequest, event_list_response::EventListResponse};
use crate::api::extractors::current_user::CurrentUser;
use crate::state::AppState;

use jot_core::Event;
use jot_db::EventRepository;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

const LIST_LIMIT: i64 = 100;

pub async fn create_events(
    State(state): State<AppState>,
    current: CurrentUser,
    Json(request): Json<CreateEventsRequest>,
) -> ApiResult<impl IntoResponse> {
    if request.items.is_empty() {
        return Err(ApiError::validation("At least one item is required"));
    }

    let events: Vec<Event> = request
        .items
        .into_iter()
        .map(|d| Event::from_draft(current.user_id, d))
        .collect();

    EventRepository::new(state.pool.clone())
        .create_many(&events)
        .await?;

    Ok((StatusCode::CREATED, Json(json!({ "count": events.len() }))))
}

pub async fn list_events(
    State(state): State<AppState>,
    current: CurrentUser,
) -> ApiResult<impl IntoResponse> {
    let events = EventRepository::new(state.pool.clone())
        .list_by_user(current.user_id, LIST_LIMIT)
        .await?;

    Ok(Json(EventListResponse { events }))
}
