use crate::helpers::{body_of, client_for, only_request, respond_with};

use creditsafe_core::xml;
use creditsafe_core::{ErrorKind, PortfolioCompany};

use wiremock::MockServer;

#[tokio::test]
async fn given_portfolio_ids_when_fetched_then_returns_portfolios() {
    let server = MockServer::start().await;
    respond_with(&server, 200, "get-portfolios-success.xml").await;
    let client = client_for(&server);

    let portfolios = client
        .get_portfolios(&[14_462, 14_461])
        .await
        .expect("portfolios should be returned");

    assert_eq!(portfolios.len(), 2);
    assert_eq!(portfolios[0].attribute("Id"), Some("14460"));

    let envelope = xml::parse(&body_of(&only_request(&server).await)).expect("XML body");
    let ids: Vec<(&str, &str)> = envelope
        .path(&["Body", "GetPortfolios", "portfolioIds"])
        .expect("portfolioIds")
        .children
        .iter()
        .map(|id| (id.name.as_str(), id.text()))
        .collect();
    assert_eq!(
        ids,
        [("arr:unsignedInt", "14462"), ("arr:unsignedInt", "14461")]
    );
}

#[tokio::test]
async fn given_unknown_portfolio_when_fetched_then_request_error() {
    let server = MockServer::start().await;
    respond_with(&server, 200, "get-portfolios-not-found.xml").await;
    let client = client_for(&server);

    let error = client
        .get_portfolios(&[1])
        .await
        .expect_err("should fail");

    let error = error.as_service().expect("service error");
    assert_eq!(error.kind(), ErrorKind::Request);
    assert!(error.message().contains("Invalid portfolio list"));
}

#[tokio::test]
async fn given_new_portfolio_when_created_then_returns_result() {
    let server = MockServer::start().await;
    respond_with(&server, 200, "create-portfolio-success.xml").await;
    let client = client_for(&server);

    let result = client
        .create_portfolio(true, "development_test")
        .await
        .expect("portfolio should be created");

    assert!(result.child("Portfolios").is_some());

    let envelope = xml::parse(&body_of(&only_request(&server).await)).expect("XML body");
    let settings = envelope
        .path(&["Body", "CreatePortfolio", "settings"])
        .expect("settings");
    assert_eq!(settings.attribute("Enabled"), Some("true"));
    assert_eq!(settings.attribute("Name"), Some("development_test"));
}

#[tokio::test]
async fn given_portfolios_when_removed_then_ok() {
    let server = MockServer::start().await;
    respond_with(&server, 200, "empty-success.xml").await;
    let client = client_for(&server);

    client
        .remove_portfolios(&[12_421])
        .await
        .expect("portfolios should be removed");
}

#[tokio::test]
async fn given_companies_when_added_and_removed_then_requests_sent() {
    let server = MockServer::start().await;
    respond_with(&server, 200, "empty-success.xml").await;
    let client = client_for(&server);

    client
        .add_companies_to_portfolios(
            &[12_422],
            vec![PortfolioCompany::new("GB003/0/07495895", "GoCardless")],
        )
        .await
        .expect("companies should be added");
    client
        .remove_companies_from_portfolios(&[12_422], vec!["GB003/0/07495895".to_string()])
        .await
        .expect("companies should be removed");

    let requests = server
        .received_requests()
        .await
        .expect("request recording is enabled");
    assert_eq!(requests.len(), 2);

    let added = xml::parse(&body_of(&requests[0])).expect("XML body");
    let company = added
        .path(&["Body", "AddCompaniesToPortfolios", "companies", "Companies", "Company"])
        .expect("Company element");
    assert_eq!(company.attribute("key"), Some("GB003/0/07495895"));
    assert_eq!(company.text(), "GoCardless");

    let removed = xml::parse(&body_of(&requests[1])).expect("XML body");
    assert_eq!(
        removed
            .path(&["Body", "RemoveCompaniesFromPortfolios", "companyIds", "string"])
            .map(|n| n.text()),
        Some("GB003/0/07495895")
    );
}

#[tokio::test]
async fn given_empty_portfolio_list_when_removed_then_rejected_locally() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let error = client.remove_portfolios(&[]).await.expect_err("should fail");

    assert!(error.is_validation());
}
