use creditsafe_core::{ClientConfig, CreditsafeClient, TransportOptions};

use std::path::Path;

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub const USERNAME: &str = "AzureDiamond";
pub const PASSWORD: &str = "hunter2";
pub const AUTHORIZATION: &str = "Basic QXp1cmVEaWFtb25kOmh1bnRlcjI=";
pub const SERVICE_PATH: &str = "/GlobalData/1.3/MainServiceBasic.svc";

pub fn load_fixture(name: &str) -> String {
    let fixture = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("integration_tests")
        .join("fixtures")
        .join(name);

    std::fs::read_to_string(&fixture)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {e}", fixture.display()))
}

pub fn client_for(server: &MockServer) -> CreditsafeClient {
    client_with_timeout(server, 5)
}

pub fn client_with_timeout(server: &MockServer, timeout_secs: u64) -> CreditsafeClient {
    let transport = TransportOptions {
        endpoint: Some(format!("{}{SERVICE_PATH}", server.uri())),
        timeout_secs,
        ..TransportOptions::default()
    };

    CreditsafeClient::new(ClientConfig::new(USERNAME, PASSWORD).with_transport(transport))
        .expect("client should build")
}

/// Answer every authenticated POST to the service with `status` and `fixture`.
pub async fn respond_with(server: &MockServer, status: u16, fixture: &str) {
    Mock::given(method("POST"))
        .and(path(SERVICE_PATH))
        .and(header("Authorization", AUTHORIZATION))
        .respond_with(
            ResponseTemplate::new(status)
                .insert_header("Content-Type", "text/xml; charset=utf-8")
                .set_body_string(load_fixture(fixture)),
        )
        .mount(server)
        .await;
}

pub async fn only_request(server: &MockServer) -> Request {
    let mut requests = server
        .received_requests()
        .await
        .expect("request recording is enabled");
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests.remove(0)
}

pub fn body_of(request: &Request) -> String {
    String::from_utf8(request.body.clone()).expect("request body is UTF-8")
}
