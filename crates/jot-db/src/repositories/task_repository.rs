use crate::Result as DbErrorResult;

use jot_core::Task;

use chrono::{DateTime, NaiveDate};
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct TaskRepository {
    pool: SqlitePool,
}

#[derive(sqlx::FromRow)]
struct TaskRow {
    id: String,
    user_id: String,
    content: String,
    due_date: Option<String>,
    is_completed: bool,
    is_important: bool,
    created_at: i64,
}

impl From<TaskRow> for Task {
    fn from(r: TaskRow) -> Self {
        Task {
            id: Uuid::parse_str(&r.id).unwrap(),
            user_id: Uuid::parse_str(&r.user_id).unwrap(),
            content: r.content,
            due_date: r
                .due_date
                .map(|d| NaiveDate::parse_from_str(&d, "%Y-%m-%d").unwrap()),
            is_completed: r.is_completed,
            is_important: r.is_important,
            created_at: DateTime::from_timestamp(r.created_at, 0).unwrap(),
        }
    }
}

impl TaskRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a batch of tasks in one transaction. The batch commits or
    /// fails as a unit; it is independent of other categories' batches.
    pub async fn create_many(&self, tasks: &[Task]) -> DbErrorResult<()> {
        let mut tx = self.pool.begin().await?;

        for task in tasks {
            sqlx::query(
                r#"
                  INSERT INTO tasks (id, user_id, content, due_date, is_completed, is_important, created_at)
                  VALUES (?, ?, ?, ?, ?, ?, ?)
                  "#,
            )
            .bind(task.id.to_string())
            .bind(task.user_id.to_string())
            .bind(&task.content)
            .bind(task.due_date.map(|d| d.format("%Y-%m-%d").to_string()))
            .bind(task.is_completed)
            .bind(task.is_important)
            .bind(task.created_at.timestamp())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    pub async fn list_by_user(&self, user_id: Uuid, limit: i64) -> DbErrorResult<Vec<Task>> {
        let rows: Vec<TaskRow> = sqlx::query_as(
            r#"
              SELECT id, user_id, content, due_date, is_completed, is_important, created_at
              FROM tasks
              WHERE user_id = ?
              ORDER BY created_at DESC
              LIMIT ?
              "#,
        )
        .bind(user_id.to_string())
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Task::from).collect())
    }
}
