pub mod config;
pub mod creditsafe;
pub mod event_sink;
pub mod transport;
pub mod validation;
pub mod xml;

pub use config::ConfigError;
pub use creditsafe::{CreditsafeError, ErrorKind};
pub use event_sink::EventSinkError;
pub use transport::TransportFault;
pub use validation::ValidationError;
pub use xml::XmlError;

use thiserror::Error;

/// Everything a public client operation can fail with.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Service(#[from] CreditsafeError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ClientError {
    /// The service/transport error, if this is one.
    pub fn as_service(&self) -> Option<&CreditsafeError> {
        match self {
            ClientError::Service(error) => Some(error),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }
}
