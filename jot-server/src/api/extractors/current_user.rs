//! Axum extractors for session-authenticated handlers

use crate::api::cookies::{SESSION_COOKIE, clear_session_cookie};
use crate::api::error::ApiError;
use crate::state::AppState;

use jot_core::SessionIdentity;

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use uuid::Uuid;

enum Resolution {
    Identity(SessionIdentity),
    /// No usable session. `stale_cookie` is true when the request
    /// carried a session cookie that resolved to nothing, so the
    /// response should tell the client to drop it.
    Rejected { stale_cookie: bool },
}

async fn resolve_session(parts: &Parts, state: &AppState) -> Resolution {
    let jar = CookieJar::from_headers(&parts.headers);
    let Some(cookie) = jar.get(SESSION_COOKIE) else {
        return Resolution::Rejected {
            stale_cookie: false,
        };
    };

    let Ok(token) = Uuid::parse_str(cookie.value()) else {
        log::debug!("Session cookie is not a valid token");
        return Resolution::Rejected { stale_cookie: true };
    };

    match state.sessions.validate(token).await {
        Ok(Some(identity)) => Resolution::Identity(identity),
        // Expired (row deleted during validation) or revoked
        Ok(None) => Resolution::Rejected { stale_cookie: true },
        Err(e) => {
            log::error!("Session lookup failed: {e}");
            // Transient store failure, the cookie may still be good
            Resolution::Rejected {
                stale_cookie: false,
            }
        }
    }
}

/// 401 rejection. Carries a clearing Set-Cookie when the request's
/// session cookie turned out to be dead.
pub struct Unauthenticated {
    clear_cookie: Option<Cookie<'static>>,
}

impl IntoResponse for Unauthenticated {
    fn into_response(self) -> Response {
        let response = ApiError::unauthorized("Authentication required").into_response();
        match self.clear_cookie {
            Some(cookie) => (CookieJar::new().add(cookie), response).into_response(),
            None => response,
        }
    }
}

/// Extracts the authenticated caller from the session cookie.
///
/// Rejects with 401 when the cookie is missing, malformed, or resolves
/// to no live session. Expired sessions are deleted during resolution
/// and the rejection clears the cookie.
pub struct CurrentUser {
    pub session_id: Uuid,
    pub user_id: Uuid,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Unauthenticated;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match resolve_session(parts, state).await {
                Resolution::Identity(identity) => Ok(CurrentUser {
                    session_id: identity.session_id,
                    user_id: identity.user_id,
                }),
                Resolution::Rejected { stale_cookie } => Err(Unauthenticated {
                    clear_cookie: stale_cookie
                        .then(|| clear_session_cookie(state.config.auth.secure_cookies)),
                }),
            }
        }
    }
}

/// Like [`CurrentUser`] but never rejects. Handlers that serve both
/// signed-in and guest callers branch on the inner Option.
pub struct MaybeUser(pub Option<SessionIdentity>);

impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = std::convert::Infallible;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            Ok(MaybeUser(match resolve_session(parts, state).await {
                Resolution::Identity(identity) => Some(identity),
                Resolution::Rejected { .. } => None,
            }))
        }
    }
}
