pub mod auth;
pub mod cookies;
pub mod error;
pub mod events;
pub mod extractors;
pub mod history;
pub mod issues;
pub mod notes;
pub mod organize;
pub mod tasks;

pub use cookies::{GUEST_COOKIE, SESSION_COOKIE};
pub use error::{ApiError, Result};
