pub mod event;
pub mod issue;
pub mod issue_status;
pub mod note;
pub mod organize;
pub mod session;
pub mod task;
pub mod user;
pub mod user_status;
