use crate::models::organize::EventDraft;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub start_at: DateTime<Utc>,
    pub end_at: Option<DateTime<Utc>>,
    pub is_all_day: bool,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn from_draft(user_id: Uuid, draft: EventDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            content: draft.content,
            start_at: draft.start_at,
            end_at: draft.end_at,
            is_all_day: draft.is_all_day,
            created_at: Utc::now(),
        }
    }
}
