use crate::Result as DbErrorResult;

use jot_core::{Issue, IssueStatus};

use std::str::FromStr;

use chrono::DateTime;
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct IssueRepository {
    pool: SqlitePool,
}

#[derive(sqlx::FromRow)]
struct IssueRow {
    id: String,
    user_id: String,
    content: String,
    status: String,
    created_at: i64,
}

impl From<IssueRow> for Issue {
    fn from(r: IssueRow) -> Self {
        Issue {
            id: Uuid::parse_str(&r.id).unwrap(),
            user_id: Uuid::parse_str(&r.user_id).unwrap(),
            content: r.content,
            status: IssueStatus::from_str(&r.status).unwrap(),
            created_at: DateTime::from_timestamp(r.created_at, 0).unwrap(),
        }
    }
}

impl IssueRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_many(&self, issues: &[Issue]) -> DbErrorResult<()> {
        let mut tx = self.pool.begin().await?;

        for issue in issues {
            sqlx::query(
                r#"
                  INSERT INTO issues (id, user_id, content, status, created_at)
                  VALUES (?, ?, ?, ?, ?)
                  "#,
            )
            .bind(issue.id.to_string())
            .bind(issue.user_id.to_string())
            .bind(&issue.content)
            .bind(issue.status.as_str())
            .bind(issue.created_at.timestamp())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    pub async fn list_by_user(&self, user_id: Uuid, limit: i64) -> DbErrorResult<Vec<Issue>> {
        let rows: Vec<IssueRow> = sqlx::query_as(
            r#"
              SELECT id, user_id, content, status, created_at
              FROM issues
              WHERE user_id = ?
              ORDER BY created_at DESC
              LIMIT ?
              "#,
        )
        .bind(user_id.to_string())
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Issue::from).collect())
    }
}
