use crate::helpers::{
    AUTHORIZATION, PASSWORD, SERVICE_PATH, USERNAME, client_for, client_with_timeout,
    load_fixture, respond_with,
};

use creditsafe_core::{
    ClientConfig, ClientError, CreditsafeClient, ErrorKind, SearchCriteria, TransportOptions,
};

use std::time::Duration;

use wiremock::matchers::{header, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn criteria() -> SearchCriteria {
    SearchCriteria::new("GB").registration_number("07495895")
}

fn kind_of(error: &ClientError) -> ErrorKind {
    error.as_service().expect("service error").kind()
}

/// **VALUE**: A SOAP fault served with status 500 keeps its fault string.
///
/// **BUG THIS CATCHES**: Would catch 500 being treated as a bare HTTP failure
/// before the body is inspected.
#[tokio::test]
async fn given_soap_fault_when_searched_then_unknown_api_error_with_fault_string() {
    let server = MockServer::start().await;
    respond_with(&server, 500, "error-fault.xml").await;
    let client = client_for(&server);

    let error = client.find_company(criteria()).await.expect_err("should fail");

    assert_eq!(kind_of(&error), ErrorKind::UnknownApi);
    assert!(
        error
            .to_string()
            .contains("cannot be processed at the receiver")
    );
}

#[tokio::test]
async fn given_plain_server_error_when_searched_then_unknown_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let error = client.find_company(criteria()).await.expect_err("should fail");

    assert_eq!(kind_of(&error), ErrorKind::UnknownApi);
}

#[tokio::test]
async fn given_bad_gateway_when_searched_then_bad_gateway_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let error = client.find_company(criteria()).await.expect_err("should fail");

    assert_eq!(kind_of(&error), ErrorKind::BadGateway);
}

/// **VALUE**: A slow service surfaces as a timeout, not a hang.
///
/// **WHY THIS MATTERS**: Credit checks often sit in a checkout path with its
/// own deadline; the configured timeout must actually be applied.
#[tokio::test]
async fn given_slow_service_when_searched_then_timeout_error() {
    // GIVEN: A service slower than the client timeout
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("Authorization", AUTHORIZATION))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(load_fixture("find-companies-successful.xml"))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;
    let client = client_with_timeout(&server, 1);

    // WHEN: Searching
    let error = client.find_company(criteria()).await.expect_err("should fail");

    // THEN: The failure is a timeout
    assert_eq!(kind_of(&error), ErrorKind::Timeout);
}

#[tokio::test]
async fn given_nothing_listening_when_searched_then_http_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("local addr").port()
    };
    let transport = TransportOptions {
        endpoint: Some(format!("http://127.0.0.1:{port}{SERVICE_PATH}")),
        timeout_secs: 5,
        ..TransportOptions::default()
    };
    let client =
        CreditsafeClient::new(ClientConfig::new(USERNAME, PASSWORD).with_transport(transport))
            .expect("client should build");

    let error = client.find_company(criteria()).await.expect_err("should fail");

    assert_eq!(kind_of(&error), ErrorKind::Http);
    assert!(error.to_string().contains("Error making HTTP request"));
}

#[tokio::test]
async fn given_client_when_debug_formatted_then_password_hidden() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let debug = format!("{client:?}");

    assert!(debug.contains(USERNAME));
    assert!(!debug.contains(PASSWORD));
}
