//! Classification of vendor messages embedded in an otherwise successful response.
//!
//! The service reports business outcomes as `Message` elements carrying a
//! `Code` attribute. Depending on the operation they arrive unprefixed in the
//! default namespace or under the `q1` prefix.

use crate::error::CreditsafeError;
use crate::messages::ObservedMessage;
use crate::xml::XmlNode;

use log::{debug, warn};

const MESSAGE_ELEMENT: &str = "Message";
const CODE_ATTRIBUTE: &str = "Code";

/// Prefixes under which a message element is recognised. `None` is the default namespace.
const MESSAGE_PREFIXES: [Option<&str>; 2] = [Some("q1"), None];

fn is_message_element(node: &XmlNode) -> bool {
    node.local_name() == MESSAGE_ELEMENT && MESSAGE_PREFIXES.contains(&node.prefix())
}

/// Every vendor message in the response, in document order.
pub fn observed_messages(response: &XmlNode) -> Vec<ObservedMessage> {
    std::iter::once(response)
        .chain(response.descendants())
        .filter(|node| is_message_element(node))
        .filter_map(|node| match node.attribute(CODE_ATTRIBUTE) {
            Some(code) => Some(ObservedMessage::new(code, Some(node.text().to_string()))),
            None => {
                warn!("Ignoring <{}> without a {CODE_ATTRIBUTE} attribute", node.name);
                None
            }
        })
        .collect()
}

/// Fail on the first error-level message; informational messages pass.
///
/// # Errors
///
/// Returns the [`CreditsafeError`] variant matching the message's category,
/// carrying the catalog text and any detail text from the response.
pub fn classify(response: &XmlNode) -> Result<(), CreditsafeError> {
    for observed in observed_messages(response) {
        let resolved = observed.resolve();

        if !resolved.is_error() {
            debug!(
                "Informational message {}: {}",
                resolved.code(),
                observed.describe()
            );
            continue;
        }

        return Err(CreditsafeError::for_category(
            resolved.category(),
            observed.describe(),
        ));
    }

    Ok(())
}
