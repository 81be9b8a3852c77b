use jot_core::{Event, Issue, Note, Task};

use serde::Serialize;

/// Recent records across all four collections, each list newest first.
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub tasks: Vec<Task>,
    pub events: Vec<Event>,
    pub issues: Vec<Issue>,
    pub notes: Vec<Note>,
}
