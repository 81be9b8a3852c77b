use jot_ai::Classifier;
use jot_auth::SessionManager;
use jot_config::Config;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state. The classifier handle is built once at
/// startup and holds no per-request state; everything else mutable lives
/// in the store or in the caller's cookies.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub sessions: SessionManager,
    pub classifier: Arc<dyn Classifier>,
    pub config: Arc<Config>,
}
