//! SOAP 1.1 envelope wrapping and unwrapping.

use crate::error::TransportFault;
use crate::namespace::{self, SOAP_ENV, SOAP_ENV_VAL};
use crate::xml::{self, XmlNode};

use common::HttpStatusCode;

const BODY: &str = "Body";
const FAULT: &str = "Fault";

/// Wrap an operation element in an envelope declaring every namespace prefix.
pub fn wrap(message: &XmlNode) -> XmlNode {
    let envelope = XmlNode::new(format!("{SOAP_ENV}:Envelope"))
        .with_attribute(format!("xmlns:{SOAP_ENV}"), SOAP_ENV_VAL);

    namespace::ALL
        .iter()
        .fold(envelope, |envelope, (prefix, uri)| {
            envelope.with_attribute(format!("xmlns:{prefix}"), *uri)
        })
        .with_child(XmlNode::new(format!("{SOAP_ENV}:Header")))
        .with_child(XmlNode::new(format!("{SOAP_ENV}:{BODY}")).with_child(message.clone()))
}

/// Turn an HTTP exchange into the response `Body`, or the fault it represents.
///
/// Precedence: 401 and 502 statuses, then a SOAP fault, then any other
/// non-success status, then an unparseable body.
pub fn unwrap(status_code: u16, body: &str) -> Result<XmlNode, TransportFault> {
    let status = HttpStatusCode(status_code);
    if status.is_unauthorized() || status.is_bad_gateway() {
        return Err(TransportFault::from_http_response(status_code, body));
    }

    let parsed = xml::parse(body);

    if let Ok(document) = &parsed {
        if let Some(fault) = document.child(BODY).and_then(|body| body.child(FAULT)) {
            return Err(fault_from(fault));
        }
    }

    if !status.is_success() {
        return Err(TransportFault::from_http_response(status_code, body));
    }

    let document = parsed.map_err(|e| TransportFault::malformed(e.to_string()))?;

    document
        .child(BODY)
        .cloned()
        .ok_or_else(|| TransportFault::malformed(format!("<{}> has no SOAP Body", document.name)))
}

fn fault_from(fault: &XmlNode) -> TransportFault {
    // SOAP 1.1 uses faultcode/faultstring; SOAP 1.2 uses Code/Value and Reason/Text.
    let code = fault
        .child_text("faultcode")
        .or_else(|| fault.path(&["Code", "Value"]).map(XmlNode::text))
        .unwrap_or_default();
    let message = fault
        .child_text("faultstring")
        .or_else(|| fault.path(&["Reason", "Text"]).map(XmlNode::text))
        .unwrap_or_default();

    TransportFault::soap_fault(code, message)
}
