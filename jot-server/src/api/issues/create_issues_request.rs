use jot_core::IssueDraft;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateIssuesRequest {
    pub items: Vec<IssueDraft>,
}
