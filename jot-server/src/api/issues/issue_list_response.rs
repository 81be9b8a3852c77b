use jot_core::Issue;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct IssueListResponse {
    pub issues: Vec<Issue>,
}
