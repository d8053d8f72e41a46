//! Catalog of the vendor's six-digit message codes.
//!
//! The service documents its codes with six digits but strips the leading
//! zero in some responses, so lookups pad before matching.
//!
//! | Second digit | Category   |
//! |--------------|------------|
//! | `1`          | Data       |
//! | `2`          | Account    |
//! | `3`          | Request    |
//! | `4`          | Processing |
//! | other        | Unknown    |

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

pub const CODE_WIDTH: usize = 6;

const UNKNOWN_ERROR_TEXT: &str = "Unknown error";

/// Coarse grouping of a vendor code, derived from its second digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageCategory {
    Data,
    Account,
    Request,
    Processing,
    Unknown,
}

impl MessageCategory {
    pub fn from_code(code: &str) -> Self {
        match code.as_bytes().get(1) {
            Some(b'1') => MessageCategory::Data,
            Some(b'2') => MessageCategory::Account,
            Some(b'3') => MessageCategory::Request,
            Some(b'4') => MessageCategory::Processing,
            _ => MessageCategory::Unknown,
        }
    }
}

impl fmt::Display for MessageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MessageCategory::Data => "data",
            MessageCategory::Account => "account",
            MessageCategory::Request => "request",
            MessageCategory::Processing => "processing",
            MessageCategory::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorMessage {
    code: Cow<'static, str>,
    text: Cow<'static, str>,
    is_error: bool,
    in_catalog: bool,
}

impl VendorMessage {
    const fn info(code: &'static str, text: &'static str) -> Self {
        Self {
            code: Cow::Borrowed(code),
            text: Cow::Borrowed(text),
            is_error: false,
            in_catalog: true,
        }
    }

    const fn error(code: &'static str, text: &'static str) -> Self {
        Self {
            code: Cow::Borrowed(code),
            text: Cow::Borrowed(text),
            is_error: true,
            in_catalog: true,
        }
    }

    fn unknown(code: &str) -> Self {
        Self {
            code: Cow::Owned(code.to_string()),
            text: Cow::Borrowed(UNKNOWN_ERROR_TEXT),
            is_error: true,
            in_catalog: false,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    /// False for the synthetic entry returned for an unrecognised code.
    pub fn is_known(&self) -> bool {
        self.in_catalog
    }

    /// Unrecognised codes are always [`MessageCategory::Unknown`], whatever
    /// their digits say.
    pub fn category(&self) -> MessageCategory {
        if !self.in_catalog {
            return MessageCategory::Unknown;
        }
        MessageCategory::from_code(&self.code)
    }
}

pub const NO_RESULTS: VendorMessage = VendorMessage::info("010101", "No results");
pub const TOO_MANY_RESULTS: VendorMessage = VendorMessage::info("010102", "Too many results");
pub const REPORT_UNAVAILABLE: VendorMessage =
    VendorMessage::error("010103", "Report unavailable");
pub const REPORT_UNAVAILABLE_LEGAL: VendorMessage =
    VendorMessage::error("010104", "Report unavailable due to legal causes");
pub const REPORT_UNAVAILABLE_ONLINE: VendorMessage =
    VendorMessage::error("010105", "Report unavailable online");
pub const LEGAL_NOTICE: VendorMessage = VendorMessage::info("010106", "Legal notice");
pub const INVALID_CREDENTIALS: VendorMessage =
    VendorMessage::error("020101", "Invalid credentials");
pub const ACCESS_RESTRICTED: VendorMessage = VendorMessage::error("020102", "Access restricted");
pub const ACCESS_LIMITS_NEARING: VendorMessage =
    VendorMessage::info("020103", "Access limits nearing");
pub const REPORTBOX_ALMOST_FULL: VendorMessage =
    VendorMessage::error("020201", "Reportbox almost full");
pub const REPORTBOX_FULL: VendorMessage = VendorMessage::error("020202", "Reportbox full");
pub const INVALID_REQUEST_XML: VendorMessage =
    VendorMessage::error("030101", "Invalid request XML");
pub const INVALID_OPERATION_PARAMS: VendorMessage =
    VendorMessage::error("030102", "Invalid operation parameters");
pub const OPERATION_NOT_SUPPORTED: VendorMessage =
    VendorMessage::error("030103", "Operation not supported");
pub const INVALID_CUSTOM_DATA_SPECIFIED: VendorMessage =
    VendorMessage::error("030104", "Invalid custom data specified");
pub const CHANGE_NOTIFICATION: VendorMessage =
    VendorMessage::info("030201", "Change notification");
pub const TEMPORARY_SYSTEM_PROBLEM: VendorMessage =
    VendorMessage::error("030202", "Temporary system problem");
pub const ENDPOINT_SHUTDOWN: VendorMessage = VendorMessage::error("030203", "Endpoint shutdown");
pub const UNEXPECTED_INTERNAL_ERROR: VendorMessage =
    VendorMessage::error("040101", "Unexpected internal error");
pub const OTHER_ERROR: VendorMessage = VendorMessage::error("040102", "Other");
pub const DATA_SERVICE_PROBLEMS: VendorMessage =
    VendorMessage::error("040103", "Data service access problems");
pub const DATA_SERVICE_INVALID_RESPONSE: VendorMessage =
    VendorMessage::error("040104", "Data service invalid response");

pub static ALL: &[VendorMessage] = &[
    NO_RESULTS,
    TOO_MANY_RESULTS,
    REPORT_UNAVAILABLE,
    REPORT_UNAVAILABLE_LEGAL,
    REPORT_UNAVAILABLE_ONLINE,
    LEGAL_NOTICE,
    INVALID_CREDENTIALS,
    ACCESS_RESTRICTED,
    ACCESS_LIMITS_NEARING,
    REPORTBOX_ALMOST_FULL,
    REPORTBOX_FULL,
    INVALID_REQUEST_XML,
    INVALID_OPERATION_PARAMS,
    OPERATION_NOT_SUPPORTED,
    INVALID_CUSTOM_DATA_SPECIFIED,
    CHANGE_NOTIFICATION,
    TEMPORARY_SYSTEM_PROBLEM,
    ENDPOINT_SHUTDOWN,
    UNEXPECTED_INTERNAL_ERROR,
    OTHER_ERROR,
    DATA_SERVICE_PROBLEMS,
    DATA_SERVICE_INVALID_RESPONSE,
];

/// Resolve a code as reported by the service.
///
/// Never fails: an unrecognised code yields an `Unknown error` entry that keeps
/// the code exactly as given.
pub fn lookup(code: &str) -> VendorMessage {
    let padded = format!("{:0>width$}", code, width = CODE_WIDTH);

    ALL.iter()
        .find(|message| message.code() == padded)
        .cloned()
        .unwrap_or_else(|| VendorMessage::unknown(code))
}

/// A message element found in an actual response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObservedMessage {
    pub code: String,
    pub detail_text: Option<String>,
}

impl ObservedMessage {
    pub fn new(code: impl Into<String>, detail_text: Option<String>) -> Self {
        let detail_text = detail_text
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty());

        Self {
            code: code.into(),
            detail_text,
        }
    }

    pub fn resolve(&self) -> VendorMessage {
        lookup(&self.code)
    }

    /// Catalog text, with the response's detail appended in parentheses.
    pub fn describe(&self) -> String {
        let resolved = self.resolve();
        match &self.detail_text {
            Some(detail) => format!("{} ({detail})", resolved.text()),
            None => resolved.text().to_string(),
        }
    }

    pub fn is(&self, entry: &VendorMessage) -> bool {
        self.resolve().code() == entry.code()
    }
}
