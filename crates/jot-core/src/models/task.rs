use crate::models::organize::TaskDraft;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub due_date: Option<NaiveDate>,
    pub is_completed: bool,
    pub is_important: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn from_draft(user_id: Uuid, draft: TaskDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            content: draft.content,
            due_date: draft.due_date,
            is_completed: false,
            is_important: draft.is_important,
            created_at: Utc::now(),
        }
    }
}
