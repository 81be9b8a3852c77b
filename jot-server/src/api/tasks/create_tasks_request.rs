use jot_core::TaskDraft;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateTasksRequest {
    pub items: Vec<TaskDraft>,
}
