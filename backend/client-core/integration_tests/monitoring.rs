use crate::helpers::{body_of, client_for, only_request, respond_with};

use creditsafe_core::messages::{ACCESS_LIMITS_NEARING, NO_RESULTS};
use creditsafe_core::xml;
use creditsafe_core::{ErrorKind, ListMonitoredCompanies};

use std::time::{Duration, UNIX_EPOCH};

use wiremock::MockServer;

#[tokio::test]
async fn given_portfolio_when_rules_fetched_then_returns_rules() {
    let server = MockServer::start().await;
    respond_with(&server, 200, "get-portfolio-monitoring-rules-success.xml").await;
    let client = client_for(&server);

    let rules = client
        .get_portfolio_monitoring_rules(14_462)
        .await
        .expect("rules should be returned");

    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0].attribute("EventCode"), Some("CR"));
}

#[tokio::test]
async fn given_event_codes_when_rules_set_then_one_rule_per_code_sent() {
    let server = MockServer::start().await;
    respond_with(&server, 200, "empty-success.xml").await;
    let client = client_for(&server);

    let codes: Vec<String> = ["CR", "PR", "NC"].iter().map(|c| c.to_string()).collect();
    client
        .set_portfolio_monitoring_rules(12_422, codes)
        .await
        .expect("rules should be set");

    let envelope = xml::parse(&body_of(&only_request(&server).await)).expect("XML body");
    let sent: Vec<&str> = envelope
        .path(&["Body", "SetMonitoringRules", "newRules"])
        .expect("newRules")
        .children_named("Rule")
        .filter_map(|rule| rule.attribute("EventCode"))
        .collect();
    assert_eq!(sent, ["CR", "PR", "NC"]);
}

#[tokio::test]
async fn given_monitored_companies_when_listed_then_returned() {
    let server = MockServer::start().await;
    respond_with(&server, 200, "list-monitored-companies-success.xml").await;
    let client = client_for(&server);

    let since = UNIX_EPOCH + Duration::from_secs(1_704_067_200);
    let listing = client
        .list_monitored_companies(ListMonitoredCompanies::new(vec![14_462]).changed_since(since))
        .await
        .expect("companies should be listed");

    assert_eq!(listing.companies.len(), 1);
    assert_eq!(listing.companies[0].attribute("Id"), Some("GB003/0/07495895"));
    assert!(listing.messages.is_empty());

    let envelope = xml::parse(&body_of(&only_request(&server).await)).expect("XML body");
    let listing = envelope
        .path(&["Body", "ListMonitoredCompanies"])
        .expect("operation element");
    assert_eq!(listing.child_text("changedSince"), Some("2024-01-01T00:00:00Z"));
    assert_eq!(listing.child_text("changedOnly"), Some("true"));
}

/// **VALUE**: "No results" from a listing yields an empty list, not an error.
///
/// **BUG THIS CATCHES**: Would catch the check relying on message wording
/// instead of the catalog code.
#[tokio::test]
async fn given_no_results_code_when_listed_then_empty() {
    let server = MockServer::start().await;
    respond_with(&server, 200, "list-monitored-companies-none.xml").await;
    let client = client_for(&server);

    let listing = client
        .list_monitored_companies(ListMonitoredCompanies::new(vec![14_462]))
        .await
        .expect("listing should succeed");

    assert!(listing.is_empty());
    assert!(listing.has_message(&NO_RESULTS));
}

/// **VALUE**: Several informational messages without any company payload still
/// make a successful, empty listing, and every message reaches the caller.
///
/// **WHY THIS MATTERS**: "Access limits nearing" is the only warning a caller
/// gets before the account stops answering; dropping it hides that.
#[tokio::test]
async fn given_several_informational_messages_without_payload_when_listed_then_empty_with_messages() {
    // GIVEN: "No results" plus "Access limits nearing", no Companies element
    let server = MockServer::start().await;
    respond_with(&server, 200, "list-monitored-companies-messages-only.xml").await;
    let client = client_for(&server);

    // WHEN: Listing
    let listing = client
        .list_monitored_companies(ListMonitoredCompanies::new(vec![14_462]))
        .await
        .expect("listing should succeed");

    // THEN: No companies, both messages in order
    assert!(listing.is_empty());
    let codes: Vec<&str> = listing.messages.iter().map(|m| m.code.as_str()).collect();
    assert_eq!(codes, ["10101", "20103"]);
    assert!(listing.has_message(&ACCESS_LIMITS_NEARING));
    assert_eq!(
        listing.descriptions()[1],
        "Access limits nearing (Monthly report limit is 95% used.)"
    );
}

#[tokio::test]
async fn given_only_limits_nearing_without_companies_when_listed_then_empty_with_message() {
    let server = MockServer::start().await;
    respond_with(&server, 200, "list-monitored-companies-limits-nearing.xml").await;
    let client = client_for(&server);

    let listing = client
        .list_monitored_companies(ListMonitoredCompanies::new(vec![14_462]))
        .await
        .expect("listing should succeed");

    assert!(listing.is_empty());
    assert_eq!(listing.messages.len(), 1);
    assert!(listing.has_message(&ACCESS_LIMITS_NEARING));
    assert!(!listing.has_message(&NO_RESULTS));
}

#[tokio::test]
async fn given_days_when_check_period_set_then_sent() {
    let server = MockServer::start().await;
    respond_with(&server, 200, "empty-success.xml").await;
    let client = client_for(&server);

    client
        .set_default_changes_check_period(7)
        .await
        .expect("period should be set");

    let envelope = xml::parse(&body_of(&only_request(&server).await)).expect("XML body");
    assert_eq!(
        envelope
            .path(&["Body", "SetDefaultChangesCheckPeriod", "days"])
            .map(|n| n.text()),
        Some("7")
    );
}

#[tokio::test]
async fn given_language_and_country_when_events_fetched_then_result_returned() {
    let server = MockServer::start().await;
    respond_with(&server, 200, "get-supported-change-events-success.xml").await;
    let client = client_for(&server);

    let result = client
        .get_supported_change_events("EN", "NL")
        .await
        .expect("events should be returned");

    assert_eq!(
        result
            .child("ChangeEvents")
            .map(|events| events.children_named("ChangeEvent").count()),
        Some(2)
    );
}

#[tokio::test]
async fn given_unsupported_language_when_events_fetched_then_request_error() {
    let server = MockServer::start().await;
    respond_with(
        &server,
        200,
        "get-supported-change-events-language-not-found.xml",
    )
    .await;
    let client = client_for(&server);

    let error = client
        .get_supported_change_events("XX", "NL")
        .await
        .expect_err("should fail");

    let error = error.as_service().expect("service error");
    assert_eq!(error.kind(), ErrorKind::Request);
    assert!(error.message().contains("language is not supported"));
}
