use crate::models::issue_status::IssueStatus;
use crate::models::organize::IssueDraft;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub status: IssueStatus,
    pub created_at: DateTime<Utc>,
}

impl Issue {
    pub fn from_draft(user_id: Uuid, draft: IssueDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            content: draft.content,
            status: draft.status,
            created_at: Utc::now(),
        }
    }
}
