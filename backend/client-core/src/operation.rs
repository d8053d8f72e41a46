//! The fixed set of remote operations the service exposes.

use crate::namespace::OPER_VAL;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    FindCompanies,
    RetrieveCompanyOnlineReport,
    GetPortfolios,
    CreatePortfolio,
    RemovePortfolios,
    GetMonitoringRules,
    SetMonitoringRules,
    AddCompaniesToPortfolios,
    RemoveCompaniesFromPortfolios,
    ListMonitoredCompanies,
    SetDefaultChangesCheckPeriod,
    GetSupportedChangeEvents,
}

impl Operation {
    /// Element name of the request body, also the WSDL operation name.
    pub fn element_name(&self) -> &'static str {
        match self {
            Operation::FindCompanies => "FindCompanies",
            Operation::RetrieveCompanyOnlineReport => "RetrieveCompanyOnlineReport",
            Operation::GetPortfolios => "GetPortfolios",
            Operation::CreatePortfolio => "CreatePortfolio",
            Operation::RemovePortfolios => "RemovePortfolios",
            Operation::GetMonitoringRules => "GetMonitoringRules",
            Operation::SetMonitoringRules => "SetMonitoringRules",
            Operation::AddCompaniesToPortfolios => "AddCompaniesToPortfolios",
            Operation::RemoveCompaniesFromPortfolios => "RemoveCompaniesFromPortfolios",
            Operation::ListMonitoredCompanies => "ListMonitoredCompanies",
            Operation::SetDefaultChangesCheckPeriod => "SetDefaultChangesCheckPeriod",
            Operation::GetSupportedChangeEvents => "GetSupportedChangeEvents",
        }
    }

    /// Snake-case key used in event names, e.g. `find_companies`.
    pub fn key(&self) -> &'static str {
        match self {
            Operation::FindCompanies => "find_companies",
            Operation::RetrieveCompanyOnlineReport => "retrieve_company_online_report",
            Operation::GetPortfolios => "get_portfolios",
            Operation::CreatePortfolio => "create_portfolio",
            Operation::RemovePortfolios => "remove_portfolios",
            Operation::GetMonitoringRules => "get_monitoring_rules",
            Operation::SetMonitoringRules => "set_monitoring_rules",
            Operation::AddCompaniesToPortfolios => "add_companies_to_portfolios",
            Operation::RemoveCompaniesFromPortfolios => "remove_companies_from_portfolios",
            Operation::ListMonitoredCompanies => "list_monitored_companies",
            Operation::SetDefaultChangesCheckPeriod => "set_default_changes_check_period",
            Operation::GetSupportedChangeEvents => "get_supported_change_events",
        }
    }

    fn service(&self) -> &'static str {
        match self {
            Operation::FindCompanies => "CompanySearchService",
            Operation::RetrieveCompanyOnlineReport => "CompanyDeliveryService",
            _ => "PortfolioMonitoringService",
        }
    }

    /// Value of the `SOAPAction` HTTP header.
    pub fn soap_action(&self) -> String {
        format!("{OPER_VAL}/{}/{}", self.service(), self.element_name())
    }

    /// Element wrapping the response payload, e.g. `FindCompaniesResponse`.
    pub fn response_element(&self) -> String {
        format!("{}Response", self.element_name())
    }

    /// Element holding the result inside the response, e.g. `FindCompaniesResult`.
    pub fn result_element(&self) -> String {
        format!("{}Result", self.element_name())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
