use crate::helpers::{body_of, client_for, only_request, respond_with};

use creditsafe_core::ErrorKind;
use creditsafe_core::xml;

use wiremock::MockServer;

fn custom_data() -> Vec<(String, String)> {
    vec![
        ("foo".to_string(), "bar".to_string()),
        ("bar".to_string(), "baz".to_string()),
    ]
}

#[tokio::test]
async fn given_report_available_when_requested_then_returns_report_element() {
    let server = MockServer::start().await;
    respond_with(&server, 200, "company-report-successful.xml").await;
    let client = client_for(&server);

    let report = client
        .company_report("GB003/0/07495895", custom_data())
        .await
        .expect("report should be returned");

    assert_eq!(report.local_name(), "Report");
    assert_eq!(report.attribute("CompanyId"), Some("GB003/0/07495895"));
    assert!(report.child("CompanySummary").is_some());
}

#[tokio::test]
async fn given_custom_data_when_requested_then_sent_as_keyed_entries() {
    let server = MockServer::start().await;
    respond_with(&server, 200, "company-report-successful.xml").await;
    let client = client_for(&server);

    client
        .company_report("GB003/0/07495895", custom_data())
        .await
        .expect("report should be returned");

    let envelope = xml::parse(&body_of(&only_request(&server).await)).expect("XML body");
    let operation = envelope
        .path(&["Body", "RetrieveCompanyOnlineReport"])
        .expect("operation element");
    assert_eq!(operation.child_text("companyId"), Some("GB003/0/07495895"));
    assert_eq!(operation.child_text("reportType"), Some("Full"));
    assert_eq!(operation.child_text("language"), Some("EN"));
    let keys: Vec<&str> = operation
        .path(&["customData", "Entries"])
        .expect("entries")
        .children_named("Entry")
        .filter_map(|entry| entry.attribute("key"))
        .collect();
    assert_eq!(keys, ["foo", "bar"]);
}

/// **VALUE**: A five-digit "report unavailable" code becomes a data error.
///
/// **BUG THIS CATCHES**: Would catch the leading-zero padding being skipped on
/// the live path, which turns 10103 into an unknown API error.
#[tokio::test]
async fn given_report_unavailable_when_requested_then_data_error() {
    let server = MockServer::start().await;
    respond_with(&server, 200, "company-report-not-found.xml").await;
    let client = client_for(&server);

    let error = client
        .company_report("GB003/0/07495895", Vec::new())
        .await
        .expect_err("report should fail");

    let error = error.as_service().expect("service error");
    assert_eq!(error.kind(), ErrorKind::Data);
    assert!(error.message().starts_with("Report unavailable"));
}
