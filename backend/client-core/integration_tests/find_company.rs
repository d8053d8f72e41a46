use crate::helpers::{body_of, client_for, only_request, respond_with};

use creditsafe_core::xml;
use creditsafe_core::{ClientError, ErrorKind, SearchCriteria};

use wiremock::MockServer;

/// **VALUE**: End-to-end happy path through the real HTTP transport.
///
/// **WHY THIS MATTERS**: Covers envelope building, auth, SOAPAction, response
/// unwrapping, classification and result mapping in one pass.
///
/// **BUG THIS CATCHES**: Would catch any break in the request/response pipeline,
/// e.g. a lost `Companies` element or a wrong company id.
#[tokio::test]
async fn given_gb_registration_number_when_found_then_returns_company() {
    // GIVEN: A service returning one GB company
    let server = MockServer::start().await;
    respond_with(&server, 200, "find-companies-successful.xml").await;
    let client = client_for(&server);

    // WHEN: Searching by registration number
    let companies = client
        .find_company(SearchCriteria::new("GB").registration_number("RN123"))
        .await
        .expect("search should succeed")
        .expect("companies should be present");

    // THEN: The company is mapped
    assert_eq!(companies.len(), 1);
    let company = &companies[0];
    assert_eq!(company.id, "GB003/0/07495895");
    assert_eq!(company.name.as_deref(), Some("GOCARDLESS LTD"));
    assert_eq!(company.registration_number.as_deref(), Some("07495895"));
    assert_eq!(company.country.as_deref(), Some("GB"));
    assert_eq!(company.status.as_deref(), Some("Active"));
    assert!(company.online_reports);
    assert!(!company.monitoring);
    assert_eq!(company.available_report_types, ["Full"]);
    assert_eq!(
        company.address.as_ref().and_then(|a| a.postal_code.as_deref()),
        Some("EC1V7LQ")
    );
}

#[tokio::test]
async fn given_search_when_sent_then_request_is_well_formed_soap() {
    let server = MockServer::start().await;
    respond_with(&server, 200, "find-companies-successful.xml").await;
    let client = client_for(&server);

    client
        .find_company(SearchCriteria::new("GB").registration_number("RN123"))
        .await
        .expect("search should succeed");

    let request = only_request(&server).await;
    let soap_action = request
        .headers
        .get("SOAPAction")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    assert_eq!(
        soap_action.as_deref(),
        Some("\"http://www.creditsafe.com/globaldata/operations/CompanySearchService/FindCompanies\"")
    );

    let envelope = xml::parse(&body_of(&request)).expect("request body should be XML");
    let search = envelope
        .path(&["Body", "FindCompanies"])
        .expect("FindCompanies element");
    assert_eq!(search.name, "oper:FindCompanies");
    assert_eq!(
        search.path(&["countries", "CountryCode"]).map(|n| n.text()),
        Some("GB")
    );
    assert_eq!(
        search
            .path(&["searchCriteria", "RegistrationNumber"])
            .map(|n| n.text()),
        Some("RN123")
    );
}

/// **VALUE**: "No results" is not an error.
///
/// **BUG THIS CATCHES**: Would catch the informational 010101 message being
/// raised, or an empty `Vec` being returned where callers expect `None`.
#[tokio::test]
async fn given_no_results_message_when_searched_then_returns_none() {
    let server = MockServer::start().await;
    respond_with(&server, 200, "find-companies-none-found.xml").await;
    let client = client_for(&server);

    let companies = client
        .find_company(SearchCriteria::new("GB").registration_number("RN123"))
        .await
        .expect("search should succeed");

    assert!(companies.is_none());
}

/// **VALUE**: Bad credentials surface as an account error.
///
/// **WHY THIS MATTERS**: The service answers 401 with an HTML page and no vendor
/// code. Without the special case callers would see an opaque unknown error.
#[tokio::test]
async fn given_unauthorized_response_when_searched_then_account_error() {
    let server = MockServer::start().await;
    respond_with(&server, 401, "error-invalid-credentials.html").await;
    let client = client_for(&server);

    let error = client
        .find_company(SearchCriteria::new("GB").registration_number("RN123"))
        .await
        .expect_err("search should fail");

    let error = error.as_service().expect("service error");
    assert_eq!(error.kind(), ErrorKind::Account);
    assert!(error.message().contains("invalid credentials"));
}

/// **BUG THIS CATCHES**: Would catch a SOAP fault body on a 401 overriding the
/// status and turning bad credentials into an unknown API error.
#[tokio::test]
async fn given_unauthorized_response_with_fault_body_when_searched_then_account_error() {
    let server = MockServer::start().await;
    respond_with(&server, 401, "error-invalid-credentials-fault.xml").await;
    let client = client_for(&server);

    let error = client
        .find_company(SearchCriteria::new("GB").registration_number("RN123"))
        .await
        .expect_err("search should fail");

    let error = error.as_service().expect("service error");
    assert_eq!(error.kind(), ErrorKind::Account);
    assert!(!error.message().contains("Access is denied"));
}

#[tokio::test]
async fn given_error_message_with_detail_when_searched_then_request_error() {
    let server = MockServer::start().await;
    respond_with(&server, 200, "find-companies-error.xml").await;
    let client = client_for(&server);

    let error = client
        .find_company(SearchCriteria::new("GB").registration_number("RN123"))
        .await
        .expect_err("search should fail");

    let error = error.as_service().expect("service error");
    assert_eq!(error.kind(), ErrorKind::Request);
    assert_eq!(
        error.message(),
        "Invalid operation parameters (Invalid countries list specified.)"
    );
}

#[tokio::test]
async fn given_error_message_without_detail_when_searched_then_catalog_text() {
    let server = MockServer::start().await;
    respond_with(&server, 200, "find-companies-error-no-text.xml").await;
    let client = client_for(&server);

    let error = client
        .find_company(SearchCriteria::new("GB").registration_number("RN123"))
        .await
        .expect_err("search should fail");

    assert_eq!(
        error.as_service().map(|e| e.message().to_string()).as_deref(),
        Some("Invalid operation parameters")
    );
}

/// **VALUE**: Invalid criteria never reach the network.
///
/// **BUG THIS CATCHES**: Would catch validation moved after the HTTP call, which
/// wastes a billable request and returns a vendor error instead.
#[tokio::test]
async fn given_city_for_non_german_search_when_searched_then_rejected_without_request() {
    let server = MockServer::start().await;
    respond_with(&server, 200, "find-companies-successful.xml").await;
    let client = client_for(&server);

    let error = client
        .find_company(
            SearchCriteria::new("GB")
                .registration_number("RN123")
                .city("Berlin"),
        )
        .await
        .expect_err("search should be rejected");

    assert!(matches!(error, ClientError::Validation(_)));
    assert!(
        server
            .received_requests()
            .await
            .expect("request recording is enabled")
            .is_empty()
    );
}

#[tokio::test]
async fn given_german_city_when_searched_then_sent_as_address() {
    let server = MockServer::start().await;
    respond_with(&server, 200, "find-companies-successful.xml").await;
    let client = client_for(&server);

    client
        .find_company(
            SearchCriteria::new("DE")
                .registration_number("RN123")
                .city("Berlin"),
        )
        .await
        .expect("search should succeed");

    let envelope = xml::parse(&body_of(&only_request(&server).await)).expect("XML body");
    assert_eq!(
        envelope
            .path(&["Body", "FindCompanies", "searchCriteria", "Address", "City"])
            .map(|n| n.text()),
        Some("Berlin")
    );
}

#[tokio::test]
async fn given_french_name_search_when_sent_then_match_beginning() {
    let server = MockServer::start().await;
    respond_with(&server, 200, "find-companies-successful.xml").await;
    let client = client_for(&server);

    client
        .find_company(SearchCriteria::new("FR").company_name("Mimes Inc"))
        .await
        .expect("search should succeed");

    let envelope = xml::parse(&body_of(&only_request(&server).await)).expect("XML body");
    let name = envelope
        .path(&["Body", "FindCompanies", "searchCriteria", "Name"])
        .expect("Name element");
    assert_eq!(name.name, "dat:Name");
    assert_eq!(name.attribute("MatchType"), Some("MatchBeginning"));
    assert_eq!(name.text(), "Mimes Inc");
}
