pub mod organize;
pub mod organize_request;
pub mod persister;
pub mod save;
