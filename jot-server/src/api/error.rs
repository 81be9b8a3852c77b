use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use log::error;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{message} at {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("{message} at {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    #[error("{message} at {location}")]
    Forbidden {
        message: String,
        location: ErrorLocation,
    },

    #[error("{message} at {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("{message} at {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    #[error("{message} at {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::Validation { message, .. }
            | Self::Unauthorized { message, .. }
            | Self::Forbidden { message, .. }
            | Self::NotFound { message, .. }
            | Self::Conflict { message, .. }
            | Self::Internal { message, .. } => message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            error!("{self}");
        }

        (status, Json(json!({ "error": self.message() }))).into_response()
    }
}

impl From<jot_db::DbError> for ApiError {
    #[track_caller]
    fn from(err: jot_db::DbError) -> Self {
        if err.is_unique_violation() {
            Self::Conflict {
                message: "Resource already exists".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        } else {
            error!("Database error: {err}");
            Self::Internal {
                message: "Database operation failed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        }
    }
}

impl From<jot_auth::AuthError> for ApiError {
    #[track_caller]
    fn from(err: jot_auth::AuthError) -> Self {
        error!("Auth error: {err}");
        Self::Internal {
            message: "Authentication operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<jot_ai::AiError> for ApiError {
    #[track_caller]
    fn from(err: jot_ai::AiError) -> Self {
        error!("Classifier error: {err}");
        Self::Internal {
            message: "Failed to organize text".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
