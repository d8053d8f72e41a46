use crate::helpers::{client_for, respond_with};

use creditsafe_core::{BroadcastEventSink, ErrorKind, SearchCriteria};

use std::sync::Arc;

use wiremock::MockServer;

/// **VALUE**: Subscribers see every invocation with its request and outcome.
///
/// **WHY THIS MATTERS**: Audit trails of credit checks are built from these
/// events; a call that never shows up is a compliance gap.
#[tokio::test]
async fn given_subscriber_when_search_succeeds_then_event_received() {
    // GIVEN: A client publishing to a broadcast sink with one subscriber
    let server = MockServer::start().await;
    respond_with(&server, 200, "find-companies-successful.xml").await;
    let sink = BroadcastEventSink::default();
    let mut events = sink.subscribe();
    let client = client_for(&server).with_event_sink(Arc::new(sink));

    // WHEN: Searching
    client
        .find_company(SearchCriteria::new("GB").registration_number("07495895"))
        .await
        .expect("search should succeed");

    // THEN: Exactly one event describing the call
    let event = events.try_recv().expect("event published");
    assert_eq!(event.name, "creditsafe.find_companies");
    assert_eq!(event.transaction_id.len(), 20);
    assert_eq!(event.payload.request.local_name(), "FindCompanies");
    assert!(event.payload.response().is_some());
    assert!(events.try_recv().is_err(), "only one event per call");
}

#[tokio::test]
async fn given_subscriber_when_search_fails_then_error_event_received() {
    let server = MockServer::start().await;
    respond_with(&server, 401, "error-invalid-credentials.html").await;
    let sink = BroadcastEventSink::default();
    let mut events = sink.subscribe();
    let client = client_for(&server).with_event_sink(Arc::new(sink));

    client
        .find_company(SearchCriteria::new("GB").company_name("GoCardless"))
        .await
        .expect_err("search should fail");

    let event = events.try_recv().expect("event published");
    assert_eq!(event.name, "creditsafe.find_companies");
    assert_eq!(
        event.payload.error().map(|error| error.kind()),
        Some(ErrorKind::Account)
    );
}

#[tokio::test]
async fn given_invalid_criteria_when_searched_then_no_event() {
    let server = MockServer::start().await;
    let sink = BroadcastEventSink::default();
    let mut events = sink.subscribe();
    let client = client_for(&server).with_event_sink(Arc::new(sink));

    client
        .find_company(SearchCriteria::new("GB"))
        .await
        .expect_err("validation should fail");

    assert!(events.try_recv().is_err());
}
