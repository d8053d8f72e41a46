use crate::xml::XmlNode;

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompanyAddress {
    pub simple_value: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
}

impl CompanyAddress {
    pub fn from_node(node: &XmlNode) -> Self {
        Self {
            simple_value: owned_text(node, "SimpleValue"),
            street: owned_text(node, "Street"),
            city: owned_text(node, "City"),
            postal_code: owned_text(node, "PostalCode"),
        }
    }
}

/// One `Company` entry of a search result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompanySummary {
    /// Creditsafe id, e.g. `GB003/0/07495895`; pass it to `company_report`.
    pub id: String,
    pub country: Option<String>,
    pub safe_number: Option<String>,
    pub name: Option<String>,
    pub company_type: Option<String>,
    pub status: Option<String>,
    pub registration_number: Option<String>,
    pub vat_number: Option<String>,
    pub address: Option<CompanyAddress>,
    pub available_report_types: Vec<String>,
    pub available_languages: Vec<String>,
    pub date_of_latest_accounts: Option<String>,
    pub online_reports: bool,
    pub monitoring: bool,
}

impl CompanySummary {
    pub fn from_node(node: &XmlNode) -> Self {
        Self {
            id: node.attribute("Id").unwrap_or_default().to_string(),
            country: owned_attribute(node, "Country"),
            safe_number: owned_attribute(node, "SafeNo"),
            name: owned_text(node, "Name"),
            company_type: owned_text(node, "Type"),
            status: owned_text(node, "Status"),
            registration_number: owned_text(node, "RegistrationNumber"),
            vat_number: owned_text(node, "VatNumber"),
            address: node.child("Address").map(CompanyAddress::from_node),
            available_report_types: texts(node, "AvailableReportTypes", "AvailableReportType"),
            available_languages: texts(node, "AvailableLanguages", "AvailableLanguage"),
            date_of_latest_accounts: owned_attribute(node, "DateOfLatestAccounts"),
            online_reports: flag(node, "OnlineReports"),
            monitoring: flag(node, "Monitoring"),
        }
    }
}

fn owned_text(node: &XmlNode, local_name: &str) -> Option<String> {
    node.child_text(local_name)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

fn owned_attribute(node: &XmlNode, local_name: &str) -> Option<String> {
    node.attribute(local_name).map(str::to_string)
}

fn flag(node: &XmlNode, local_name: &str) -> bool {
    node.attribute(local_name)
        .is_some_and(|value| value.eq_ignore_ascii_case("true"))
}

fn texts(node: &XmlNode, list: &str, item: &str) -> Vec<String> {
    node.child(list)
        .map(|list| {
            list.children_named(item)
                .map(|entry| entry.text().to_string())
                .collect()
        })
        .unwrap_or_default()
}
