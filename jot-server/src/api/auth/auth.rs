//! Account and session handlers.

use crate::api::auth::{
    login_request::LoginRequest, register_request::RegisterRequest, user_response::UserResponse,
};
use crate::api::cookies::{SESSION_COOKIE, clear_session_cookie, session_cookie};
use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::extractors::current_user::CurrentUser;
use crate::state::AppState;

use jot_auth::{hash_password, verify_password};
use jot_core::{User, UserStatus};
use jot_db::UserRepository;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::cookie::CookieJar;
use log::info;
use serde_json::json;
use uuid::Uuid;

fn validate_email(email: &str) -> ApiResult<()> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(ApiError::validation("A valid email is required"));
    }
    Ok(())
}

pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<RegisterRequest>,
) -> ApiResult<impl IntoResponse> {
    validate_email(&request.email)?;
    if request.password.is_empty() {
        return Err(ApiError::validation("Password is required"));
    }
    if request.name.trim().is_empty() {
        return Err(ApiError::validation("Name is required"));
    }

    let repo = UserRepository::new(state.pool.clone());
    let email = request.email.trim().to_lowercase();

    let digest = hash_password(&request.password)?;
    let user = User::new(email, digest, request.name.trim().to_owned());

    // The unique index on email is the authority; no pre-check, the
    // insert itself reports the duplicate.
    if let Err(e) = repo.create(&user).await {
        if e.is_unique_violation() {
            return Err(ApiError::conflict("Email already registered"));
        }
        return Err(e.into());
    }

    info!("Registered user {} ({})", user.id, user.email);

    let session = state.sessions.create_session(user.id).await?;
    let jar = jar.add(session_cookie(
        &session.id.to_string(),
        state.sessions.ttl_days(),
        state.config.auth.secure_cookies,
    ));

    Ok((
        StatusCode::CREATED,
        jar,
        Json(UserResponse { user: user.into() }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> ApiResult<impl IntoResponse> {
    if request.email.trim().is_empty() || request.password.is_empty() {
        return Err(ApiError::validation("Email and password are required"));
    }

    let repo = UserRepository::new(state.pool.clone());
    let email = request.email.trim().to_lowercase();

    // Same message for unknown email and wrong password.
    let Some(user) = repo.find_by_email(&email).await? else {
        return Err(ApiError::unauthorized("Invalid email or password"));
    };

    if !verify_password(&request.password, &user.password_hash)? {
        return Err(ApiError::unauthorized("Invalid email or password"));
    }

    if user.status != UserStatus::Active {
        return Err(ApiError::forbidden("Account is not active"));
    }

    // Login is the natural moment to clear the user's dead sessions.
    state.sessions.sweep_expired(user.id).await?;

    let session = state.sessions.create_session(user.id).await?;
    let jar = jar.add(session_cookie(
        &session.id.to_string(),
        state.sessions.ttl_days(),
        state.config.auth.secure_cookies,
    ));

    info!("User {} logged in", user.id);

    Ok((
        StatusCode::OK,
        jar,
        Json(UserResponse { user: user.into() }),
    ))
}

pub async fn me(
    State(state): State<AppState>,
    current: CurrentUser,
) -> ApiResult<impl IntoResponse> {
    let repo = UserRepository::new(state.pool.clone());

    // A live session pointing at a missing user row should not happen,
    // but answer 404 rather than panic if it does.
    let Some(user) = repo.find_by_id(current.user_id).await? else {
        return Err(ApiError::not_found("User not found"));
    };

    Ok(Json(UserResponse { user: user.into() }))
}

pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> ApiResult<impl IntoResponse> {
    if let Some(cookie) = jar.get(SESSION_COOKIE)
        && let Ok(token) = Uuid::parse_str(cookie.value())
    {
        state.sessions.destroy(token).await?;
    }

    // Idempotent: clearing with no session is still a 200.
    let jar = jar.add(clear_session_cookie(state.config.auth.secure_cookies));

    Ok((StatusCode::OK, jar, Json(json!({ "success": true }))))
}
