use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, Clone, ThisError)]
pub enum XmlError {
    #[error("XML Parse Error: {message} {location}")]
    Parse {
        message: String,
        location: ErrorLocation,
    },

    #[error("XML Write Error: {message} {location}")]
    Write {
        message: String,
        location: ErrorLocation,
    },
}

impl XmlError {
    #[track_caller]
    pub fn parse(message: impl Into<String>) -> Self {
        XmlError::Parse {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn write(message: impl Into<String>) -> Self {
        XmlError::Write {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
