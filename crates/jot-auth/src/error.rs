use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Password hash error: {message} {location}")]
    Hash {
        message: String,
        location: ErrorLocation,
    },

    #[error("Session store error: {source} {location}")]
    Store {
        source: jot_db::DbError,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn hash<S: Into<String>>(message: S) -> Self {
        Self::Hash {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<jot_db::DbError> for AuthError {
    #[track_caller]
    fn from(source: jot_db::DbError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
