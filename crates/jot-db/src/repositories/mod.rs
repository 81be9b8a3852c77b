pub mod event_repository;
pub mod issue_repository;
pub mod note_repository;
pub mod session_repository;
pub mod task_repository;
pub mod user_repository;
