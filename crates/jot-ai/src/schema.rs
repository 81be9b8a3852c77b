//! Fixed response schema for the extraction call.
//!
//! Four arrays, one per record category, each item with typed and
//! partially-optional fields. The service is required to return exactly
//! this shape; anything else fails the call.

use serde_json::{Value, json};

pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "tasks": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "content": { "type": "STRING", "description": "What needs to be done" },
                        "due_date": { "type": "STRING", "nullable": true, "description": "Due date (YYYY-MM-DD)" },
                        "is_important": { "type": "BOOLEAN", "description": "Urgent or critical" }
                    },
                    "required": ["content", "is_important"]
                }
            },
            "events": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "content": { "type": "STRING", "description": "Event description" },
                        "start_at": { "type": "STRING", "description": "Start time (RFC 3339, UTC)" },
                        "end_at": { "type": "STRING", "nullable": true, "description": "End time (RFC 3339, UTC)" },
                        "is_all_day": { "type": "BOOLEAN", "description": "All-day event" }
                    },
                    "required": ["content", "start_at", "is_all_day"]
                }
            },
            "issues": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "content": { "type": "STRING", "description": "Problem to track" },
                        "status": { "type": "STRING", "enum": ["OPEN", "IN_PROGRESS", "DONE"], "description": "Issue status" }
                    },
                    "required": ["content", "status"]
                }
            },
            "notes": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING", "nullable": true, "description": "Note title" },
                        "content": { "type": "STRING", "description": "Note body" }
                    },
                    "required": ["content"]
                }
            }
        },
        "required": ["tasks", "events", "issues", "notes"]
    })
}
