//! Free-text classification endpoint.
//!
//! Open to guests up to a per-client quota carried in a cookie. The
//! quota check runs before anything else, including text validation, so
//! an exhausted guest gets a consistent 403 no matter what they send.

use crate::api::cookies::{GUEST_COOKIE, guest_cookie};
use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::current_user::MaybeUser;
use crate::api::organize::organize_request::OrganizeRequest;
use crate::state::AppState;

use jot_core::OrganizeResult;

use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::extract::cookie::CookieJar;
use log::info;

fn guest_count(jar: &CookieJar) -> u32 {
    jar.get(GUEST_COOKIE)
        .and_then(|c| c.value().parse().ok())
        .unwrap_or(0)
}

pub async fn organize(
    State(state): State<AppState>,
    user: MaybeUser,
    jar: CookieJar,
    Json(request): Json<OrganizeRequest>,
) -> ApiResult<impl IntoResponse> {
    let is_guest = user.0.is_none();

    // The count is read once, before validation, and reused for the
    // post-success increment.
    let guest_uses = if is_guest {
        let used = guest_count(&jar);
        if used >= state.config.ai.guest_limit {
            return Err(ApiError::forbidden(
                "Free usage limit reached. Sign in to continue.",
            ));
        }
        Some(used)
    } else {
        None
    };

    let text = request.text.trim();
    if text.is_empty() {
        return Err(ApiError::validation("Text is required"));
    }

    let result: OrganizeResult = state.classifier.classify(text).await?;

    info!(
        "Organized {} chars into {} item(s) ({})",
        text.len(),
        result.len(),
        if is_guest { "guest" } else { "user" },
    );

    // Only a successful classification consumes a guest use.
    let jar = match guest_uses {
        Some(used) => jar.add(guest_cookie(used + 1, state.config.ai.guest_window_days)),
        None => jar,
    };

    Ok((jar, Json(result)))
}
