use crate::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

/// Raised when a secret wrapper is asked to leave the process in serialized form.
#[derive(Debug, ThisError)]
pub enum RedactError {
    #[error("Refused to serialize {secret}: call expose() to read the value {location}")]
    SerializationRefused {
        secret: &'static str,
        location: ErrorLocation,
    },
}

impl RedactError {
    #[track_caller]
    pub fn serialization_refused(secret: &'static str) -> Self {
        RedactError::SerializationRefused {
            secret,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
