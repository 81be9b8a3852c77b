//! Fan-out persistence of an organize result.
//!
//! Each category is one transactional batch; the four batches run
//! concurrently and commit independently. There is no cross-category
//! transaction, so one failing batch does not roll back the others.
//! The caller gets an error when any batch failed, and the committed
//! batches stay committed.

use crate::api::error::{ApiError, Result as ApiResult};

use jot_core::{Event, Issue, Note, OrganizeResult, Task};
use jot_db::{EventRepository, IssueRepository, NoteRepository, TaskRepository};

use log::{error, info};
use serde::Serialize;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Per-category counts of what was committed.
#[derive(Debug, Serialize)]
pub struct SaveReport {
    pub tasks: usize,
    pub events: usize,
    pub issues: usize,
    pub notes: usize,
}

impl SaveReport {
    pub fn total(&self) -> usize {
        self.tasks + self.events + self.issues + self.notes
    }
}

pub async fn save_result(
    pool: &SqlitePool,
    user_id: Uuid,
    result: OrganizeResult,
) -> ApiResult<SaveReport> {
    let tasks: Vec<Task> = result
        .tasks
        .into_iter()
        .map(|d| Task::from_draft(user_id, d))
        .collect();
    let events: Vec<Event> = result
        .events
        .into_iter()
        .map(|d| Event::from_draft(user_id, d))
        .collect();
    let issues: Vec<Issue> = result
        .issues
        .into_iter()
        .map(|d| Issue::from_draft(user_id, d))
        .collect();
    let notes: Vec<Note> = result
        .notes
        .into_iter()
        .map(|d| Note::from_draft(user_id, d))
        .collect();

    let task_repo = TaskRepository::new(pool.clone());
    let event_repo = EventRepository::new(pool.clone());
    let issue_repo = IssueRepository::new(pool.clone());
    let note_repo = NoteRepository::new(pool.clone());

    // Empty categories never touch the store.
    let (tasks_out, events_out, issues_out, notes_out) = futures::join!(
        async {
            if tasks.is_empty() {
                Ok(())
            } else {
                task_repo.create_many(&tasks).await
            }
        },
        async {
            if events.is_empty() {
                Ok(())
            } else {
                event_repo.create_many(&events).await
            }
        },
        async {
            if issues.is_empty() {
                Ok(())
            } else {
                issue_repo.create_many(&issues).await
            }
        },
        async {
            if notes.is_empty() {
                Ok(())
            } else {
                note_repo.create_many(&notes).await
            }
        },
    );

    let mut failed = Vec::new();
    for (category, outcome) in [
        ("tasks", &tasks_out),
        ("events", &events_out),
        ("issues", &issues_out),
        ("notes", &notes_out),
    ] {
        if let Err(e) = outcome {
            error!("Failed to save {category} batch for user {user_id}: {e}");
            failed.push(category);
        }
    }

    if !failed.is_empty() {
        return Err(ApiError::internal(format!(
            "Failed to save: {}",
            failed.join(", ")
        )));
    }

    let report = SaveReport {
        tasks: tasks.len(),
        events: events.len(),
        issues: issues.len(),
        notes: notes.len(),
    };

    info!("Saved {} record(s) for user {}", report.total(), user_id);

    Ok(report)
}
