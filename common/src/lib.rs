//! Shared leaf types for the Creditsafe client workspace.
//!
//! Everything here is dependency-light and free of I/O so that both the
//! client library and the CLI can lean on it:
//!
//! - [`ErrorLocation`]: file/line/column captured by `#[track_caller]`
//! - [`RedactedSecret`]: credential wrapper that never prints its value
//! - [`HttpStatusCode`]: status code stored as data, not parsed from messages

pub mod error;
pub mod http_status;
pub mod redacted_secret;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_secret::RedactedSecret;

#[cfg(test)]
mod tests;
