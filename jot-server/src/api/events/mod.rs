pub mod create_events_request;
pub mod event_list_response;
pub mod events;
