pub mod history;
pub mod history_response;
