use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum EventSinkError {
    #[error("Event Publish Error: {message} {location}")]
    Publish {
        message: String,
        location: ErrorLocation,
    },
}

impl EventSinkError {
    #[track_caller]
    pub fn publish(message: impl Into<String>) -> Self {
        EventSinkError::Publish {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
