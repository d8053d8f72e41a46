use common::ErrorLocation;

use creditsafe_core::ClientError;
use creditsafe_core::error::ConfigError;

use std::panic::Location;

use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the `creditsafe` binary.
///
/// Printed to stderr as JSON so scripts can tell failure families apart.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum CliError {
    /// Local setup failure (directories, logger)
    #[error("Cli Error: {message} {location}")]
    Cli {
        message: String,
        location: ErrorLocation,
    },

    #[error("Config Error: {message} {location}")]
    Config {
        message: String,
        location: ErrorLocation,
    },

    /// Failure reported by the client library, tagged with its kind
    #[error("Core Error: {message} {location}")]
    Core {
        kind: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Output Error: {message} {location}")]
    Output {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn cli(message: impl Into<String>) -> Self {
        CliError::Cli {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn config(error: &ConfigError) -> Self {
        CliError::Config {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn core(error: &ClientError) -> Self {
        let kind = match error {
            ClientError::Service(service) => format!("{:?}", service.kind()),
            ClientError::Validation(_) => String::from("Validation"),
            ClientError::Config(_) => String::from("Config"),
        };

        CliError::Core {
            kind,
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn output(error: &serde_json::Error) -> Self {
        CliError::Output {
            message: format!("Failed to serialize output: {error}"),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
