use crate::messages::{ObservedMessage, TOO_MANY_RESULTS};
use crate::response::{CompanySummary, MonitoredCompanies};
use crate::xml::{self, XmlNode};

const COMPANY: &str = r#"<Company xmlns="http://www.creditsafe.com/globaldata/datatypes"
    Id="DE001/1/DE12345678" Country="DE" SafeNo="DE12345678" OnlineReports="TRUE">
  <Name>Beispiel GmbH</Name>
  <Status></Status>
  <Address>
    <Street>Hauptstrasse 1</Street>
    <City>Berlin</City>
  </Address>
</Company>"#;

#[test]
fn given_company_element_when_mapped_then_fields_filled() {
    let node = xml::parse(COMPANY).expect("should parse");

    let company = CompanySummary::from_node(&node);

    assert_eq!(company.id, "DE001/1/DE12345678");
    assert_eq!(company.country.as_deref(), Some("DE"));
    assert_eq!(company.safe_number.as_deref(), Some("DE12345678"));
    assert_eq!(company.name.as_deref(), Some("Beispiel GmbH"));
    assert!(company.online_reports);
    assert!(!company.monitoring);
    let address = company.address.expect("address");
    assert_eq!(address.city.as_deref(), Some("Berlin"));
    assert_eq!(address.postal_code, None);
}

/// **BUG THIS CATCHES**: Would catch `<Status></Status>` surfacing as
/// `Some("")`, which downstream code reads as a real status.
#[test]
fn given_empty_elements_when_mapped_then_none() {
    let node = xml::parse(COMPANY).expect("should parse");

    let company = CompanySummary::from_node(&node);

    assert_eq!(company.status, None);
    assert!(company.available_report_types.is_empty());
}

#[test]
fn given_summary_when_serialized_then_snake_case_json() {
    let company = CompanySummary::from_node(
        &XmlNode::new("Company")
            .with_attribute("Id", "GB003/0/07495895")
            .with_child(XmlNode::leaf("Name", "GOCARDLESS LTD")),
    );

    let json = serde_json::to_value(&company).expect("serializable");

    assert_eq!(json["id"], "GB003/0/07495895");
    assert_eq!(json["name"], "GOCARDLESS LTD");
    assert_eq!(json["online_reports"], false);
    assert!(json["address"].is_null());
}

#[test]
fn given_listing_with_messages_when_serialized_then_messages_kept() {
    let listing = MonitoredCompanies {
        companies: Vec::new(),
        messages: vec![ObservedMessage::new("10102", None)],
    };

    let json = serde_json::to_value(&listing).expect("serializable");

    assert!(listing.is_empty());
    assert!(listing.has_message(&TOO_MANY_RESULTS));
    assert_eq!(listing.descriptions(), ["Too many results"]);
    assert_eq!(json["messages"][0]["code"], "10102");
    assert!(json["companies"].as_array().is_some_and(Vec::is_empty));
}
