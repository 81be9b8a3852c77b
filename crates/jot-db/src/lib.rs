pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::event_repository::EventRepository;
pub use repositories::issue_repository::IssueRepository;
pub use repositories::note_repository::NoteRepository;
pub use repositories::session_repository::SessionRepository;
pub use repositories::task_repository::TaskRepository;
pub use repositories::user_repository::UserRepository;
