//! Argument errors raised before any network call is made.
//!
//! Kept apart from [`CreditsafeError`](super::creditsafe::CreditsafeError) so
//! callers can tell "you called it wrong" from "the call failed" without
//! inspecting message text.

use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum ValidationError {
    #[error("Missing Argument Error: {field} is required {location}")]
    Missing {
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("Conflicting Argument Error: {message} {location}")]
    Conflicting {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unsupported Argument Error: {message} {location}")]
    Unsupported {
        message: String,
        location: ErrorLocation,
    },

    #[error("Out Of Range Argument Error: {message} {location}")]
    OutOfRange {
        message: String,
        location: ErrorLocation,
    },
}

impl ValidationError {
    #[track_caller]
    pub fn missing(field: &'static str) -> Self {
        ValidationError::Missing {
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn conflicting(message: impl Into<String>) -> Self {
        ValidationError::Conflicting {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unsupported(message: impl Into<String>) -> Self {
        ValidationError::Unsupported {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn out_of_range(message: impl Into<String>) -> Self {
        ValidationError::OutOfRange {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
