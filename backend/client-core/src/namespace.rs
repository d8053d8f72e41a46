//! XML namespace prefixes bound on every request envelope.

pub const SOAP_ENV: &str = "soapenv";
pub const SOAP_ENV_VAL: &str = "http://schemas.xmlsoap.org/soap/envelope/";

pub const OPER: &str = "oper";
pub const OPER_VAL: &str = "http://www.creditsafe.com/globaldata/operations";

pub const DAT: &str = "dat";
pub const DAT_VAL: &str = "http://www.creditsafe.com/globaldata/datatypes";

pub const CRED: &str = "cred";
pub const CRED_VAL: &str = "http://schemas.datacontract.org/2004/07/Creditsafe.GlobalData";

pub const ARR: &str = "arr";
pub const ARR_VAL: &str = "http://schemas.microsoft.com/2003/10/Serialization/Arrays";

/// `(prefix, uri)` pairs declared on the envelope.
pub const ALL: [(&str, &str); 4] = [
    (OPER, OPER_VAL),
    (DAT, DAT_VAL),
    (CRED, CRED_VAL),
    (ARR, ARR_VAL),
];

/// `oper:<local>`
pub fn oper(local: &str) -> String {
    format!("{OPER}:{local}")
}

/// `dat:<local>`
pub fn dat(local: &str) -> String {
    format!("{DAT}:{local}")
}

/// `cred:<local>`
pub fn cred(local: &str) -> String {
    format!("{CRED}:{local}")
}

/// `arr:<local>`
pub fn arr(local: &str) -> String {
    format!("{ARR}:{local}")
}
