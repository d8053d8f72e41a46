//! Request payload builders, one per remote operation.
//!
//! Each builder validates its arguments on construction, so a value that
//! exists is always safe to send.

pub mod company_report;
pub mod country;
pub mod find_company;
pub mod match_type;
pub mod monitoring;
pub mod portfolio;

pub use company_report::CompanyReportRequest;
pub use find_company::{FindCompanyRequest, SearchCriteria};
pub use match_type::MatchType;
pub use monitoring::{
    GetMonitoringRulesRequest, GetSupportedChangeEventsRequest, ListMonitoredCompanies,
    SetDefaultChangesCheckPeriodRequest, SetMonitoringRulesRequest,
};
pub use portfolio::{
    AddCompaniesToPortfoliosRequest, CreatePortfolioRequest, GetPortfoliosRequest,
    PortfolioCompany, RemoveCompaniesFromPortfoliosRequest, RemovePortfoliosRequest,
};

use crate::error::ValidationError;
use crate::namespace::{arr, oper};
use crate::operation::Operation;
use crate::xml::XmlNode;

pub trait SoapRequest {
    const OPERATION: Operation;

    /// Children of the operation element.
    fn body(&self) -> Vec<XmlNode>;

    /// The full `oper:<Operation>` element placed inside the SOAP body.
    fn message(&self) -> XmlNode {
        XmlNode::new(oper(Self::OPERATION.element_name())).with_children(self.body())
    }
}

/// `oper:portfolioIds` holding one `arr:unsignedInt` per id.
pub(crate) fn portfolio_ids_node(ids: &[u32]) -> XmlNode {
    XmlNode::new(oper("portfolioIds")).with_children(
        ids.iter()
            .map(|id| XmlNode::leaf(arr("unsignedInt"), id.to_string())),
    )
}

#[track_caller]
pub(crate) fn require_ids<T>(field: &'static str, ids: &[T]) -> Result<(), ValidationError> {
    if ids.is_empty() {
        return Err(ValidationError::missing(field));
    }
    Ok(())
}
