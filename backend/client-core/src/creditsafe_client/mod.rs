use crate::classifier;
use crate::config::{ClientConfig, Environment};
use crate::error::{ClientError, ConfigError, CreditsafeError};
use crate::events::{EventSink, LogEventSink};
use crate::invoker::OperationInvoker;
use crate::messages;
use crate::request::{
    AddCompaniesToPortfoliosRequest, CompanyReportRequest, CreatePortfolioRequest,
    FindCompanyRequest, GetMonitoringRulesRequest, GetPortfoliosRequest,
    GetSupportedChangeEventsRequest, ListMonitoredCompanies, PortfolioCompany,
    RemoveCompaniesFromPortfoliosRequest, RemovePortfoliosRequest, SearchCriteria,
    SetDefaultChangesCheckPeriodRequest, SetMonitoringRulesRequest, SoapRequest,
};
use crate::response::{CompanySummary, MonitoredCompanies};
use crate::transport::HttpSoapTransport;
use crate::xml::XmlNode;

use std::fmt;
use std::sync::Arc;

use log::{debug, info};
use once_cell::sync::OnceCell;
use url::Url;

/// Entry point for every remote operation.
///
/// The HTTP transport is built on first use and then shared by all calls made
/// through this client, including concurrent ones.
pub struct CreditsafeClient {
    config: ClientConfig,
    endpoint: Url,
    sink: Arc<dyn EventSink>,
    transport: OnceCell<HttpSoapTransport>,
}

impl CreditsafeClient {
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the credentials or settings are invalid.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let endpoint = config.settings.endpoint()?;

        info!(
            "Creditsafe client for '{}' targeting {} ({})",
            config.credentials.username(),
            config.settings.environment,
            endpoint
        );

        Ok(Self {
            config,
            endpoint,
            sink: Arc::new(LogEventSink),
            transport: OnceCell::new(),
        })
    }

    /// Route invocation events to `sink` instead of the log.
    pub fn with_event_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn environment(&self) -> Environment {
        self.config.settings.environment
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub(crate) fn transport(&self) -> Result<&HttpSoapTransport, CreditsafeError> {
        self.transport.get_or_try_init(|| {
            debug!("Building HTTP transport for {}", self.endpoint);
            HttpSoapTransport::new(
                self.endpoint.clone(),
                &self.config.credentials,
                &self.config.settings.transport,
            )
        })
    }

    async fn invoke<R: SoapRequest>(&self, request: &R) -> Result<XmlNode, CreditsafeError> {
        let transport = self.transport()?;
        OperationInvoker::new(transport, self.sink.as_ref())
            .invoke(R::OPERATION, request.message())
            .await
    }

    /// Invoke and descend to the operation's `<Op>Response/<Op>Result` element.
    async fn invoke_for_result<R: SoapRequest>(
        &self,
        request: &R,
    ) -> Result<XmlNode, CreditsafeError> {
        let body = self.invoke(request).await?;
        result_node(&body, &R::OPERATION.response_element(), &R::OPERATION.result_element())
            .cloned()
    }

    // ============================================
    // SEARCH & REPORTS
    // ============================================

    /// Search for companies.
    ///
    /// Returns `None` when the service answers without a `Companies` element,
    /// which is how "no results" is reported.
    ///
    /// # Errors
    ///
    /// [`ClientError::Validation`] for invalid criteria (no request is sent),
    /// otherwise the classified service error.
    pub async fn find_company(
        &self,
        criteria: SearchCriteria,
    ) -> Result<Option<Vec<CompanySummary>>, ClientError> {
        let request = FindCompanyRequest::new(criteria)?;
        let result = self.invoke_for_result(&request).await?;

        let companies = result.child("Companies").and_then(|companies| {
            let found: Vec<CompanySummary> = companies
                .children_named("Company")
                .map(CompanySummary::from_node)
                .collect();
            (!found.is_empty()).then_some(found)
        });

        Ok(companies)
    }

    /// Full report for `company_id`, returned as the `Report` element.
    pub async fn company_report(
        &self,
        company_id: &str,
        custom_data: impl IntoIterator<Item = (String, String)>,
    ) -> Result<XmlNode, ClientError> {
        let request = CompanyReportRequest::new(company_id, custom_data)?;
        let result = self.invoke_for_result(&request).await?;

        let report = result
            .path(&["Reports", "Report"])
            .cloned()
            .ok_or_else(|| missing_element("Reports/Report"))?;

        Ok(report)
    }

    // ============================================
    // PORTFOLIOS
    // ============================================

    pub async fn get_portfolios(&self, portfolio_ids: &[u32]) -> Result<Vec<XmlNode>, ClientError> {
        let request = GetPortfoliosRequest::new(portfolio_ids);
        let result = self.invoke_for_result(&request).await?;
        Ok(collect(&result, "Portfolios", "Portfolio"))
    }

    pub async fn create_portfolio(
        &self,
        information_processing_enabled: bool,
        name: &str,
    ) -> Result<XmlNode, ClientError> {
        let request = CreatePortfolioRequest::new(information_processing_enabled, name)?;
        Ok(self.invoke_for_result(&request).await?)
    }

    pub async fn remove_portfolios(&self, portfolio_ids: &[u32]) -> Result<(), ClientError> {
        let request = RemovePortfoliosRequest::new(portfolio_ids)?;
        self.invoke(&request).await?;
        Ok(())
    }

    pub async fn add_companies_to_portfolios(
        &self,
        portfolio_ids: &[u32],
        companies: Vec<PortfolioCompany>,
    ) -> Result<(), ClientError> {
        let request = AddCompaniesToPortfoliosRequest::new(portfolio_ids, companies)?;
        self.invoke(&request).await?;
        Ok(())
    }

    pub async fn remove_companies_from_portfolios(
        &self,
        portfolio_ids: &[u32],
        company_ids: Vec<String>,
    ) -> Result<(), ClientError> {
        let request = RemoveCompaniesFromPortfoliosRequest::new(portfolio_ids, company_ids)?;
        self.invoke(&request).await?;
        Ok(())
    }

    // ============================================
    // MONITORING
    // ============================================

    pub async fn get_portfolio_monitoring_rules(
        &self,
        portfolio_id: u32,
    ) -> Result<Vec<XmlNode>, ClientError> {
        let request = GetMonitoringRulesRequest::new(portfolio_id);
        let result = self.invoke_for_result(&request).await?;
        Ok(collect(&result, "Rules", "Rule"))
    }

    /// Replace the portfolio's rules with one enabled rule per event code.
    pub async fn set_portfolio_monitoring_rules(
        &self,
        portfolio_id: u32,
        event_codes: Vec<String>,
    ) -> Result<(), ClientError> {
        let request = SetMonitoringRulesRequest::new(portfolio_id, event_codes);
        self.invoke(&request).await?;
        Ok(())
    }

    /// Companies monitored in the given portfolios, with the informational
    /// messages that came with them.
    ///
    /// The company list is empty when the service reports
    /// [`NO_RESULTS`](messages::NO_RESULTS) or sends no `Companies` element.
    pub async fn list_monitored_companies(
        &self,
        query: ListMonitoredCompanies,
    ) -> Result<MonitoredCompanies, ClientError> {
        query.validate()?;
        let body = self.invoke(&query).await?;
        let observed = classifier::observed_messages(&body);

        if observed.iter().any(|message| message.is(&messages::NO_RESULTS)) {
            debug!("No monitored companies for portfolios {:?}", query.portfolio_ids);
            return Ok(MonitoredCompanies {
                companies: Vec::new(),
                messages: observed,
            });
        }

        let operation = ListMonitoredCompanies::OPERATION;
        let result = result_node(
            &body,
            &operation.response_element(),
            &operation.result_element(),
        )?;

        Ok(MonitoredCompanies {
            companies: collect(result, "Companies", "Company"),
            messages: observed,
        })
    }

    pub async fn set_default_changes_check_period(&self, days: u32) -> Result<(), ClientError> {
        let request = SetDefaultChangesCheckPeriodRequest::new(days)?;
        self.invoke(&request).await?;
        Ok(())
    }

    /// Change events the service can monitor for `country`, described in `language`.
    pub async fn get_supported_change_events(
        &self,
        language: &str,
        country: &str,
    ) -> Result<XmlNode, ClientError> {
        let request = GetSupportedChangeEventsRequest::new(language, country)?;
        Ok(self.invoke_for_result(&request).await?)
    }
}

impl fmt::Debug for CreditsafeClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreditsafeClient")
            .field("username", &self.config.credentials.username())
            .field("environment", &self.config.settings.environment)
            .field("endpoint", &self.endpoint.as_str())
            .finish_non_exhaustive()
    }
}

fn result_node<'a>(
    body: &'a XmlNode,
    response_element: &str,
    result_element: &str,
) -> Result<&'a XmlNode, CreditsafeError> {
    body.path(&[response_element, result_element])
        .ok_or_else(|| missing_element(&format!("{response_element}/{result_element}")))
}

#[track_caller]
fn missing_element(path: &str) -> CreditsafeError {
    CreditsafeError::unknown_api(format!("Unexpected response: missing {path}"))
}

fn collect(result: &XmlNode, list: &str, item: &str) -> Vec<XmlNode> {
    result
        .child(list)
        .map(|node| node.children_named(item).cloned().collect())
        .unwrap_or_default()
}
