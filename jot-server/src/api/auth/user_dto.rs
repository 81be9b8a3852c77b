use jot_core::{User, UserStatus};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Wire shape of a user. The password digest never leaves the server.
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            status: user.status,
            created_at: user.created_at,
        }
    }
}
