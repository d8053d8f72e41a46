//! Maps transport-level failures onto the [`CreditsafeError`] taxonomy.

use crate::error::{CreditsafeError, TransportFault};

use log::warn;

pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized: invalid credentials";

/// Translate a raw transport fault.
///
/// The service reports bad credentials as a bare HTTP 401 instead of through
/// a `020101` message, so that status maps straight to an account error
/// without consulting the catalog.
pub fn translate(fault: TransportFault) -> CreditsafeError {
    let translated = match &fault {
        TransportFault::SoapFault { code, message, .. } => Some(CreditsafeError::unknown_api(
            format!("({code}) {message}"),
        )),
        TransportFault::HttpStatus { status, .. } if status.is_unauthorized() => {
            Some(CreditsafeError::account(UNAUTHORIZED_MESSAGE))
        }
        TransportFault::HttpStatus {
            status, message, ..
        } => Some(CreditsafeError::unknown_api(format!(
            "HTTP error ({status}): {message}"
        ))),
        TransportFault::Timeout { message, .. } => Some(CreditsafeError::timeout(message.as_str())),
        TransportFault::BadGateway { message, .. } => {
            Some(CreditsafeError::bad_gateway(message.as_str()))
        }
        TransportFault::Connection { message, .. } => Some(CreditsafeError::http(format!(
            "Error making HTTP request: {message}"
        ))),
        // No mapping: hand the fault through untouched.
        TransportFault::Malformed { .. } => None,
    };

    match translated {
        Some(error) => {
            warn!("Transport fault translated: {fault} -> {error}");
            error
        }
        None => {
            warn!("Transport fault passed through: {fault}");
            CreditsafeError::transport(fault)
        }
    }
}
