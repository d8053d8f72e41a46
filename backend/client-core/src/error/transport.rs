//! Raw failures raised by a [`SoapTransport`](crate::transport::SoapTransport).
//!
//! These never reach a caller of the client directly; the translator maps
//! them onto [`CreditsafeError`](crate::error::creditsafe::CreditsafeError).

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, Clone, ThisError)]
pub enum TransportFault {
    #[error("SOAP Fault: ({code}) {message} {location}")]
    SoapFault {
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("HTTP Status Error: HTTP {status} - {message} {location}")]
    HttpStatus {
        status: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },

    #[error("Timeout: {message} {location}")]
    Timeout {
        message: String,
        location: ErrorLocation,
    },

    #[error("Bad Gateway: {message} {location}")]
    BadGateway {
        message: String,
        location: ErrorLocation,
    },

    #[error("Connection Error: {message} {location}")]
    Connection {
        message: String,
        location: ErrorLocation,
    },

    #[error("Malformed Response: {message} {location}")]
    Malformed {
        message: String,
        location: ErrorLocation,
    },
}

impl TransportFault {
    #[track_caller]
    pub fn soap_fault(code: impl Into<String>, message: impl Into<String>) -> Self {
        TransportFault::SoapFault {
            code: code.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Non-success HTTP response. 502 is reported as [`TransportFault::BadGateway`].
    #[track_caller]
    pub fn from_http_response(status_code: u16, body: impl Into<String>) -> Self {
        let status = HttpStatusCode(status_code);
        let location = ErrorLocation::from(Location::caller());

        if status.is_bad_gateway() {
            return TransportFault::BadGateway {
                message: format!("HTTP {status} - {}", body.into()),
                location,
            };
        }

        TransportFault::HttpStatus {
            status,
            message: body.into(),
            location,
        }
    }

    #[track_caller]
    pub fn timeout(message: impl Into<String>) -> Self {
        TransportFault::Timeout {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn connection(message: impl Into<String>) -> Self {
        TransportFault::Connection {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn malformed(message: impl Into<String>) -> Self {
        TransportFault::Malformed {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Categorize a reqwest error before it is flattened into a string.
    #[track_caller]
    pub fn from_reqwest(error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            return TransportFault::timeout(error.to_string());
        }

        if let Some(status) = error.status() {
            return TransportFault::from_http_response(status.as_u16(), error.to_string());
        }

        if error.is_decode() || error.is_body() {
            return TransportFault::malformed(error.to_string());
        }

        TransportFault::connection(error.to_string())
    }

    pub fn message(&self) -> &str {
        match self {
            TransportFault::SoapFault { message, .. }
            | TransportFault::HttpStatus { message, .. }
            | TransportFault::Timeout { message, .. }
            | TransportFault::BadGateway { message, .. }
            | TransportFault::Connection { message, .. }
            | TransportFault::Malformed { message, .. } => message,
        }
    }

    pub fn status_code(&self) -> Option<HttpStatusCode> {
        match self {
            TransportFault::HttpStatus { status, .. } => Some(*status),
            TransportFault::BadGateway { .. } => Some(HttpStatusCode::BAD_GATEWAY),
            _ => None,
        }
    }
}
