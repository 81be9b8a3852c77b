use crate::Result as DbErrorResult;

use jot_core::Event;

use chrono::DateTime;
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct EventRepository {
    pool: SqlitePool,
}

#[derive(sqlx::FromRow)]
struct EventRow {
    id: String,
    user_id: String,
    content: String,
    start_at: i64,
    end_at: Option<i64>,
    is_all_day: bool,
    created_at: i64,
}

impl From<EventRow> for Event {
    fn from(r: EventRow) -> Self {
        Event {
            id: Uuid::parse_str(&r.id).unwrap(),
            user_id: Uuid::parse_str(&r.user_id).unwrap(),
            content: r.content,
            start_at: DateTime::from_timestamp(r.start_at, 0).unwrap(),
            end_at: r.end_at.and_then(|ts| DateTime::from_timestamp(ts, 0)),
            is_all_day: r.is_all_day,
            created_at: DateTime::from_timestamp(r.created_at, 0).unwrap(),
        }
    }
}

impl EventRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_many(&self, events: &[Event]) -> DbErrorResult<()> {
        let mut tx = self.pool.begin().await?;

        for event in events {
            sqlx::query(
                r#"
                  INSERT INTO events (id, user_id, content, start_at, end_at, is_all_day, created_at)
                  VALUES (?, ?, ?, ?, ?, ?, ?)
                  "#,
            )
            .bind(event.id.to_string())
            .bind(event.user_id.to_string())
            .bind(&event.content)
            .bind(event.start_at.timestamp())
            .bind(event.end_at.map(|ts| ts.timestamp()))
            .bind(event.is_all_day)
            .bind(event.created_at.timestamp())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    pub async fn list_by_user(&self, user_id: Uuid, limit: i64) -> DbErrorResult<Vec<Event>> {
        let rows: Vec<EventRow> = sqlx::query_as(
            r#"
              SELECT id, user_id, content, start_at, end_at, is_all_day, created_at
              FROM events
              WHERE user_id = ?
              ORDER BY start_at DESC
              LIMIT ?
              "#,
        )
        .bind(user_id.to_string())
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Event::from).collect())
    }
}
