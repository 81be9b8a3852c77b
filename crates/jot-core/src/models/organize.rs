//! Transient classification output.
//!
//! An [`OrganizeResult`] is what the structured-extraction service returns
//! for one blob of free text: four ordered draft lists, one per record
//! category. It has no identity and no lifecycle of its own; the caller
//! may edit or drop items before handing the final arrays to the persister,
//! which converts drafts into durable records.
//!
//! Each category keeps its own fixed-shape draft type so the per-category
//! required fields stay enforced by the type system rather than by a pile
//! of optionals.

use crate::models::issue_status::IssueStatus;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrganizeResult {
    pub tasks: Vec<TaskDraft>,
    pub events: Vec<EventDraft>,
    pub issues: Vec<IssueDraft>,
    pub notes: Vec<NoteDraft>,
}

impl OrganizeResult {
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
            && self.events.is_empty()
            && self.issues.is_empty()
            && self.notes.is_empty()
    }

    /// Total number of draft items across all four categories.
    pub fn len(&self) -> usize {
        self.tasks.len() + self.events.len() + self.issues.len() + self.notes.len()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDraft {
    pub content: String,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    pub is_important: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDraft {
    pub content: String,
    pub start_at: DateTime<Utc>,
    #[serde(default)]
    pub end_at: Option<DateTime<Utc>>,
    pub is_all_day: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueDraft {
    pub content: String,
    pub status: IssueStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteDraft {
    #[serde(default)]
    pub title: Option<String>,
    pub content: String,
}
