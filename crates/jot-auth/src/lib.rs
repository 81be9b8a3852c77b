pub mod error;
pub mod password;
pub mod session_manager;

pub use error::{AuthError, Result};
pub use password::{hash_password, verify_password};
pub use session_manager::SessionManager;
