use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AiError {
    #[error("Extraction request failed: {source} {location}")]
    Http {
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("Extraction service returned {status}: {body} {location}")]
    Api {
        status: u16,
        body: String,
        location: ErrorLocation,
    },

    #[error("Extraction response missing candidate text {location}")]
    MissingCandidate { location: ErrorLocation },

    #[error("Extraction payload failed schema validation: {message} {location}")]
    Schema {
        message: String,
        location: ErrorLocation,
    },
}

impl From<reqwest::Error> for AiError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        Self::Http {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AiError>;
