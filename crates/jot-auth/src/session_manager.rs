//! Session issuance, validation, and destruction.
//!
//! Tokens are opaque random identifiers, not self-encoding claims, so
//! revocation is a plain row delete; the cost is one store lookup per
//! authenticated request. Expiry is a fixed window set at creation and
//! never extended by activity. Expired rows are removed lazily on first
//! validation after the expiry instant; there is no background sweeper.

use crate::Result;

use jot_core::{Session, SessionIdentity};
use jot_db::SessionRepository;

use chrono::Utc;
use log::debug;
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(Clone)]
pub struct SessionManager {
    pool: SqlitePool,
    ttl_days: i64,
}

impl SessionManager {
    pub fn new(pool: SqlitePool, ttl_days: i64) -> Self {
        Self { pool, ttl_days }
    }

    pub fn ttl_days(&self) -> i64 {
        self.ttl_days
    }

    fn repo(&self) -> SessionRepository {
        SessionRepository::new(self.pool.clone())
    }

    /// Issue a fresh session for the user. A failed insert is surfaced as
    /// a hard failure of the enclosing operation; there is no retry.
    pub async fn create_session(&self, user_id: Uuid) -> Result<Session> {
        let session = Session::new(user_id, self.ttl_days);
        self.repo().create(&session).await?;

        debug!(
            "Issued session {} for user {} (expires {})",
            session.id, user_id, session.expires_at
        );

        Ok(session)
    }

    /// Resolve a token to its identity pair.
    ///
    /// Missing row returns None. An expired row is deleted on the spot
    /// (delete-if-exists, so concurrent validators racing the same row
    /// both succeed) and also returns None.
    pub async fn validate(&self, token: Uuid) -> Result<Option<SessionIdentity>> {
        let repo = self.repo();

        let Some(session) = repo.find_by_id(token).await? else {
            return Ok(None);
        };

        if session.is_expired(Utc::now()) {
            debug!("Session {} expired, removing row", session.id);
            repo.delete(session.id).await?;
            return Ok(None);
        }

        Ok(Some(SessionIdentity {
            session_id: session.id,
            user_id: session.user_id,
        }))
    }

    /// Idempotent: destroying a token with no row is a no-op.
    pub async fn destroy(&self, token: Uuid) -> Result<()> {
        self.repo().delete(token).await?;
        Ok(())
    }

    /// Remove the user's expired sessions. Called on login so dead rows
    /// never accumulate for an active user.
    pub async fn sweep_expired(&self, user_id: Uuid) -> Result<u64> {
        let removed = self.repo().delete_expired_for_user(user_id, Utc::now()).await?;
        if removed > 0 {
            debug!("Swept {} expired session(s) for user {}", removed, user_id);
        }
        Ok(removed)
    }
}
