use crate::Result as DbErrorResult;

use jot_core::Note;

use chrono::DateTime;
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct NoteRepository {
    pool: SqlitePool,
}

#[derive(sqlx::FromRow)]
struct NoteRow {
    id: String,
    user_id: String,
    title: Option<String>,
    content: String,
    created_at: i64,
    updated_at: i64,
}

impl From<NoteRow> for Note {
    fn from(r: NoteRow) -> Self {
        Note {
            id: Uuid::parse_str(&r.id).unwrap(),
            user_id: Uuid::parse_str(&r.user_id).unwrap(),
            title: r.title,
            content: r.content,
            created_at: DateTime::from_timestamp(r.created_at, 0).unwrap(),
            updated_at: DateTime::from_timestamp(r.updated_at, 0).unwrap(),
        }
    }
}

impl NoteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_many(&self, notes: &[Note]) -> DbErrorResult<()> {
        let mut tx = self.pool.begin().await?;

        for note in notes {
            sqlx::query(
                r#"
                  INSERT INTO notes (id, user_id, title, content, created_at, updated_at)
                  VALUES (?, ?, ?, ?, ?, ?)
                  "#,
            )
            .bind(note.id.to_string())
            .bind(note.user_id.to_string())
            .bind(note.title.as_deref())
            .bind(&note.content)
            .bind(note.created_at.timestamp())
            .bind(note.updated_at.timestamp())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    pub async fn list_by_user(&self, user_id: Uuid, limit: i64) -> DbErrorResult<Vec<Note>> {
        let rows: Vec<NoteRow> = sqlx::query_as(
            r#"
              SELECT id, user_id, title, content, created_at, updated_at
              FROM notes
              WHERE user_id = ?
              ORDER BY created_at DESC
              LIMIT ?
              "#,
        )
        .bind(user_id.to_string())
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Note::from).collect())
    }
}
