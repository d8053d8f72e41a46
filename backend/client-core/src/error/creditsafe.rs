//! The error taxonomy every failed invocation is reduced to.
//!
//! Two families sit under one enum:
//! - HTTP family (`Http`, `Timeout`, `BadGateway`): the exchange itself failed
//! - API family (`Data`, `Account`, `Request`, `Processing`, `UnknownApi`): the
//!   service answered and reported a failure
//!
//! `Transport` carries a raw fault the translator had no mapping for, so it is
//! never swallowed.

use crate::error::transport::TransportFault;
use crate::messages::MessageCategory;

use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, Clone, ThisError)]
pub enum CreditsafeError {
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    #[error("Timeout Error: {message} {location}")]
    Timeout {
        message: String,
        location: ErrorLocation,
    },

    #[error("Bad Gateway Error: {message} {location}")]
    BadGateway {
        message: String,
        location: ErrorLocation,
    },

    #[error("Data Error: {message} {location}")]
    Data {
        message: String,
        location: ErrorLocation,
    },

    #[error("Account Error: {message} {location}")]
    Account {
        message: String,
        location: ErrorLocation,
    },

    #[error("Request Error: {message} {location}")]
    Request {
        message: String,
        location: ErrorLocation,
    },

    #[error("Processing Error: {message} {location}")]
    Processing {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unknown API Error: {message} {location}")]
    UnknownApi {
        message: String,
        location: ErrorLocation,
    },

    #[error("Transport Error: {fault} {location}")]
    Transport {
        fault: TransportFault,
        location: ErrorLocation,
    },
}

/// Discriminant of [`CreditsafeError`] for callers that branch on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Http,
    Timeout,
    BadGateway,
    Data,
    Account,
    Request,
    Processing,
    UnknownApi,
    Transport,
}

impl CreditsafeError {
    /// Build the API-family error a vendor message category maps to.
    #[track_caller]
    pub fn for_category(category: MessageCategory, message: impl Into<String>) -> Self {
        let message = message.into();
        let location = ErrorLocation::from(Location::caller());

        match category {
            MessageCategory::Data => CreditsafeError::Data { message, location },
            MessageCategory::Account => CreditsafeError::Account { message, location },
            MessageCategory::Request => CreditsafeError::Request { message, location },
            MessageCategory::Processing => CreditsafeError::Processing { message, location },
            MessageCategory::Unknown => CreditsafeError::UnknownApi { message, location },
        }
    }

    #[track_caller]
    pub fn http(message: impl Into<String>) -> Self {
        CreditsafeError::Http {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn timeout(message: impl Into<String>) -> Self {
        CreditsafeError::Timeout {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn bad_gateway(message: impl Into<String>) -> Self {
        CreditsafeError::BadGateway {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn account(message: impl Into<String>) -> Self {
        CreditsafeError::Account {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unknown_api(message: impl Into<String>) -> Self {
        CreditsafeError::UnknownApi {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn transport(fault: TransportFault) -> Self {
        CreditsafeError::Transport {
            fault,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CreditsafeError::Http { .. } => ErrorKind::Http,
            CreditsafeError::Timeout { .. } => ErrorKind::Timeout,
            CreditsafeError::BadGateway { .. } => ErrorKind::BadGateway,
            CreditsafeError::Data { .. } => ErrorKind::Data,
            CreditsafeError::Account { .. } => ErrorKind::Account,
            CreditsafeError::Request { .. } => ErrorKind::Request,
            CreditsafeError::Processing { .. } => ErrorKind::Processing,
            CreditsafeError::UnknownApi { .. } => ErrorKind::UnknownApi,
            CreditsafeError::Transport { .. } => ErrorKind::Transport,
        }
    }

    /// The human-readable message without the kind prefix or location suffix.
    pub fn message(&self) -> &str {
        match self {
            CreditsafeError::Http { message, .. }
            | CreditsafeError::Timeout { message, .. }
            | CreditsafeError::BadGateway { message, .. }
            | CreditsafeError::Data { message, .. }
            | CreditsafeError::Account { message, .. }
            | CreditsafeError::Request { message, .. }
            | CreditsafeError::Processing { message, .. }
            | CreditsafeError::UnknownApi { message, .. } => message,
            CreditsafeError::Transport { fault, .. } => fault.message(),
        }
    }

    /// `Http`, `Timeout` and `BadGateway`.
    pub fn is_http_error(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::Http | ErrorKind::Timeout | ErrorKind::BadGateway
        )
    }

    /// Errors reported by the service itself.
    pub fn is_api_error(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::Data
                | ErrorKind::Account
                | ErrorKind::Request
                | ErrorKind::Processing
                | ErrorKind::UnknownApi
        )
    }

    /// Hint for callers running their own retry policy. The client never retries.
    pub fn is_transient(&self) -> bool {
        matches!(self.kind(), ErrorKind::Timeout | ErrorKind::BadGateway)
    }
}
