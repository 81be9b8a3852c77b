pub mod error;
pub mod models;


pub use error::{CoreError, CoreResult};
pub use models::event::Event;
pub use models::issue::Issue;
pub use models::issue_status::IssueStatus;
pub use models::note::Note;
pub use models::organize::{EventDraft, IssueDraft, NoteDraft, OrganizeResult, TaskDraft};
pub use models::session::{Session, SessionIdentity};
pub use models::task::Task;
pub use models::user::User;
pub use models::user_status::UserStatus;
