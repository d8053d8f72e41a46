use crate::messages::{ObservedMessage, VendorMessage};
use crate::xml::XmlNode;

use serde::Serialize;

/// Result of `list_monitored_companies`.
///
/// The listing may carry informational messages (e.g. "Too many results",
/// "Access limits nearing") with or without any companies; they are kept here
/// in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MonitoredCompanies {
    pub companies: Vec<XmlNode>,
    pub messages: Vec<ObservedMessage>,
}

impl MonitoredCompanies {
    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    pub fn has_message(&self, entry: &VendorMessage) -> bool {
        self.messages.iter().any(|message| message.is(entry))
    }

    /// Catalog text of each message, detail appended.
    pub fn descriptions(&self) -> Vec<String> {
        self.messages.iter().map(ObservedMessage::describe).collect()
    }
}
