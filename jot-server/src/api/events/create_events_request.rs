use jot_core::EventDraft;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateEventsRequest {
    pub items: Vec<EventDraft>,
}
