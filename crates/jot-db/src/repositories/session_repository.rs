use crate::Result as DbErrorResult;

use jot_core::Session;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct SessionRepository {
    pool: SqlitePool,
}

#[derive(sqlx::FromRow)]
struct SessionRow {
    id: String,
    user_id: String,
    expires_at: i64,
    created_at: i64,
}

impl From<SessionRow> for Session {
    fn from(r: SessionRow) -> Self {
        Session {
            id: Uuid::parse_str(&r.id).unwrap(),
            user_id: Uuid::parse_str(&r.user_id).unwrap(),
            expires_at: DateTime::from_timestamp(r.expires_at, 0).unwrap(),
            created_at: DateTime::from_timestamp(r.created_at, 0).unwrap(),
        }
    }
}

impl SessionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, session: &Session) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO sessions (id, user_id, expires_at, created_at)
              VALUES (?, ?, ?, ?)
              "#,
        )
        .bind(session.id.to_string())
        .bind(session.user_id.to_string())
        .bind(session.expires_at.timestamp())
        .bind(session.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Session>> {
        let row: Option<SessionRow> = sqlx::query_as(
            r#"
              SELECT id, user_id, expires_at, created_at
              FROM sessions
              WHERE id = ?
              "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Session::from))
    }

    /// Delete-if-exists. Concurrent validators racing on the same expired
    /// session may both call this; neither must fail.
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<()> {
        sqlx::query("DELETE FROM sessions WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Remove dead session rows for a user. Called on login so an active
    /// user never accumulates expired sessions.
    pub async fn delete_expired_for_user(
        &self,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> DbErrorResult<u64> {
        let result = sqlx::query("DELETE FROM sessions WHERE user_id = ? AND expires_at < ?")
            .bind(user_id.to_string())
            .bind(now.timestamp())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn count_for_user(&self, user_id: Uuid) -> DbErrorResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM sessions WHERE user_id = ?")
            .bind(user_id.to_string())
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
