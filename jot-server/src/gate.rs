use crate::api::SESSION_COOKIE;

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde_json::json;

/// Page prefixes that require a session cookie. Requests without one are
/// bounced to the login page.
const PROTECTED_PAGES: &[&str] = &[
    "/dashboard",
    "/tasks",
    "/events",
    "/issues",
    "/notes",
    "/history",
];

/// Pages that make no sense for a signed-in caller.
const AUTH_PAGES: &[&str] = &["/login", "/register"];

/// API prefixes that require a session cookie. These answer 401 JSON
/// rather than redirecting, so fetch callers get a parseable body.
const PROTECTED_API: &[&str] = &[
    "/api/tasks",
    "/api/events",
    "/api/issues",
    "/api/notes",
    "/api/history",
];

fn matches_prefix(path: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|prefix| {
        path == *prefix
            || path
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with('/'))
    })
}

/// Access gate: a cheap cookie-presence check in front of the router.
///
/// This only looks for the session cookie, it does not hit the store.
/// A stale cookie gets past the gate and is then rejected by the
/// session extractor on the handler it reaches. The gate exists to keep
/// anonymous traffic off protected pages and to push signed-in users
/// away from the auth pages, not to be the authority on sessions.
pub async fn access_gate(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let has_session = CookieJar::from_headers(request.headers())
        .get(SESSION_COOKIE)
        .is_some();

    if matches_prefix(&path, PROTECTED_API) && !has_session {
        return (
            StatusCode::UNAUTHORIZED,
            axum::Json(json!({ "error": "Authentication required" })),
        )
            .into_response();
    }

    if matches_prefix(&path, PROTECTED_PAGES) && !has_session {
        return Redirect::temporary("/login").into_response();
    }

    if matches_prefix(&path, AUTH_PAGES) && has_session {
        return Redirect::temporary("/dashboard").into_response();
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_match_covers_subpaths_but_not_lookalikes() {
        assert!(matches_prefix("/tasks", PROTECTED_PAGES));
        assert!(matches_prefix("/tasks/42", PROTECTED_PAGES));
        assert!(!matches_prefix("/tasks-export", PROTECTED_PAGES));
        assert!(!matches_prefix("/", PROTECTED_PAGES));
        assert!(matches_prefix("/api/tasks", PROTECTED_API));
        assert!(!matches_prefix("/api/auth/login", PROTECTED_API));
    }
}
