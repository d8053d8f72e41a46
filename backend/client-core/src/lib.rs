pub mod classifier;
pub mod config;
pub mod error;
pub mod events;
pub mod invoker;
pub mod messages;
pub mod namespace;
pub mod operation;
pub mod request;
pub mod response;
pub mod translator;
pub mod transport;
pub mod xml;

mod creditsafe_client;
#[cfg(test)]
mod tests;

pub use config::{ClientConfig, ClientSettings, Credentials, Environment, TransportOptions};
pub use creditsafe_client::CreditsafeClient;
pub use error::{ClientError, CreditsafeError, ErrorKind, ValidationError};
pub use events::{BroadcastEventSink, EventSink, InvocationEvent, LogEventSink};
pub use request::{ListMonitoredCompanies, PortfolioCompany, SearchCriteria};
pub use response::{CompanySummary, MonitoredCompanies};
pub use xml::XmlNode;
