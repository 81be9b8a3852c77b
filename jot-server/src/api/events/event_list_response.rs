use jot_core::Event;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct EventListResponse {
    pub events: Vec<Event>,
}
