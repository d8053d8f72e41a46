//! ISO country codes the service accepts, and per-country search capabilities.

pub const AUSTRALIA: &str = "AU";
pub const AUSTRIA: &str = "AT";
pub const BELGIUM: &str = "BE";
pub const BULGARIA: &str = "BG";
pub const CANADA: &str = "CA";
pub const CROATIA: &str = "HR";
pub const CZECH_REPUBLIC: &str = "CZ";
pub const DENMARK: &str = "DK";
pub const ESTONIA: &str = "EE";
pub const FINLAND: &str = "FI";
pub const FRANCE: &str = "FR";
pub const GERMANY: &str = "DE";
pub const GREAT_BRITAIN: &str = "GB";
pub const GREECE: &str = "GR";
pub const HUNGARY: &str = "HU";
pub const ICELAND: &str = "IS";
pub const IRELAND: &str = "IE";
pub const ITALY: &str = "IT";
pub const LATVIA: &str = "LV";
pub const LIECHTENSTEIN: &str = "LI";
pub const LITHUANIA: &str = "LT";
pub const LUXEMBOURG: &str = "LU";
pub const MALTA: &str = "MT";
pub const MOLDOVA: &str = "MD";
pub const NETHERLANDS: &str = "NL";
pub const NEW_ZEALAND: &str = "NZ";
pub const NORWAY: &str = "NO";
pub const POLAND: &str = "PL";
pub const PORTUGAL: &str = "PT";
pub const ROMANIA: &str = "RO";
pub const SLOVAKIA: &str = "SK";
pub const SLOVENIA: &str = "SI";
pub const SPAIN: &str = "ES";
pub const SWEDEN: &str = "SE";
pub const SWITZERLAND: &str = "CH";
pub const UNITED_STATES: &str = "US";

pub const VAT_NUMBER_SUPPORTED: &[&str] = &[
    GERMANY,
    FRANCE,
    CZECH_REPUBLIC,
    SLOVAKIA,
    BELGIUM,
    POLAND,
    PORTUGAL,
    SPAIN,
    UNITED_STATES,
    SLOVENIA,
    CROATIA,
    BULGARIA,
    ROMANIA,
    LATVIA,
    ESTONIA,
    MOLDOVA,
    AUSTRIA,
    ITALY,
    HUNGARY,
    FINLAND,
    DENMARK,
    AUSTRALIA,
    GREECE,
];

/// Countries where `city` and `postal_code` may narrow a search.
pub const ADDRESS_SEARCH_SUPPORTED: &[&str] = &[GERMANY];

pub fn supports_vat_number(country_code: &str) -> bool {
    VAT_NUMBER_SUPPORTED.contains(&country_code)
}

pub fn supports_address_search(country_code: &str) -> bool {
    ADDRESS_SEARCH_SUPPORTED.contains(&country_code)
}
