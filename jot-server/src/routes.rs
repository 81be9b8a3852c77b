use crate::api::{auth, events, history, issues, notes, organize, tasks};
use crate::gate;
use crate::health;
use crate::state::AppState;

use axum::{
    Router,
    http::StatusCode,
    middleware,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Account and session endpoints
        .route("/api/auth/register", post(auth::auth::register))
        .route("/api/auth/login", post(auth::auth::login))
        .route("/api/auth/logout", post(auth::auth::logout))
        .route("/api/auth/me", get(auth::auth::me))
        // Classification endpoints
        .route("/api/ai/organize", post(organize::organize::organize))
        .route("/api/ai/organize/save", post(organize::save::save_organized))
        // Record collections
        .route(
            "/api/tasks",
            get(tasks::tasks::list_tasks).post(tasks::tasks::create_tasks),
        )
        .route(
            "/api/events",
            get(events::events::list_events).post(events::events::create_events),
        )
        .route(
            "/api/issues",
            get(issues::issues::list_issues).post(issues::issues::create_issues),
        )
        .route("/api/notes", get(notes::notes::list_notes).post(notes::notes::create_notes))
        .route("/api/history", get(history::history::history))
        // Health check endpoint
        .route("/health", get(health::health_check))
        // Page paths have no handlers here; the fallback keeps them
        // routable so the access gate still sees them.
        .fallback(|| async { StatusCode::NOT_FOUND })
        // Add shared state
        .with_state(state)
        // Access gate runs before any handler, fallback included
        .layer(middleware::from_fn(gate::access_gate))
        // CORS middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
