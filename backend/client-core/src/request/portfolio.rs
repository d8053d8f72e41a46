use super::{SoapRequest, portfolio_ids_node, require_ids};
use crate::error::ValidationError;
use crate::namespace::{arr, dat, oper};
use crate::operation::Operation;
use crate::xml::XmlNode;

/// An empty id list asks for every portfolio on the account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetPortfoliosRequest {
    portfolio_ids: Vec<u32>,
}

impl GetPortfoliosRequest {
    pub fn new(portfolio_ids: impl Into<Vec<u32>>) -> Self {
        Self {
            portfolio_ids: portfolio_ids.into(),
        }
    }
}

impl SoapRequest for GetPortfoliosRequest {
    const OPERATION: Operation = Operation::GetPortfolios;

    fn body(&self) -> Vec<XmlNode> {
        vec![portfolio_ids_node(&self.portfolio_ids)]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePortfolioRequest {
    information_processing_enabled: bool,
    name: String,
}

impl CreatePortfolioRequest {
    pub fn new(
        information_processing_enabled: bool,
        name: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::missing("name"));
        }

        Ok(Self {
            information_processing_enabled,
            name,
        })
    }
}

impl SoapRequest for CreatePortfolioRequest {
    const OPERATION: Operation = Operation::CreatePortfolio;

    fn body(&self) -> Vec<XmlNode> {
        vec![
            XmlNode::new(oper("settings"))
                .with_attribute("Enabled", self.information_processing_enabled.to_string())
                .with_attribute("Name", self.name.as_str()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovePortfoliosRequest {
    portfolio_ids: Vec<u32>,
}

impl RemovePortfoliosRequest {
    pub fn new(portfolio_ids: impl Into<Vec<u32>>) -> Result<Self, ValidationError> {
        let portfolio_ids = portfolio_ids.into();
        require_ids("portfolio_ids", &portfolio_ids)?;
        Ok(Self { portfolio_ids })
    }
}

impl SoapRequest for RemovePortfoliosRequest {
    const OPERATION: Operation = Operation::RemovePortfolios;

    fn body(&self) -> Vec<XmlNode> {
        vec![portfolio_ids_node(&self.portfolio_ids)]
    }
}

/// A company to start monitoring, with a free-text description shown in the
/// portfolio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioCompany {
    pub id: String,
    pub description: String,
}

impl PortfolioCompany {
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCompaniesToPortfoliosRequest {
    portfolio_ids: Vec<u32>,
    companies: Vec<PortfolioCompany>,
}

impl AddCompaniesToPortfoliosRequest {
    pub fn new(
        portfolio_ids: impl Into<Vec<u32>>,
        companies: impl Into<Vec<PortfolioCompany>>,
    ) -> Result<Self, ValidationError> {
        let portfolio_ids = portfolio_ids.into();
        let companies = companies.into();
        require_ids("portfolio_ids", &portfolio_ids)?;
        require_ids("companies", &companies)?;

        if companies.iter().any(|company| company.id.trim().is_empty()) {
            return Err(ValidationError::missing("company id"));
        }

        Ok(Self {
            portfolio_ids,
            companies,
        })
    }
}

impl SoapRequest for AddCompaniesToPortfoliosRequest {
    const OPERATION: Operation = Operation::AddCompaniesToPortfolios;

    fn body(&self) -> Vec<XmlNode> {
        let companies = self.companies.iter().map(|company| {
            XmlNode::leaf(dat("Company"), company.description.as_str())
                .with_attribute("key", company.id.as_str())
        });

        vec![
            portfolio_ids_node(&self.portfolio_ids),
            XmlNode::new(oper("companies"))
                .with_child(XmlNode::new(dat("Companies")).with_children(companies)),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveCompaniesFromPortfoliosRequest {
    portfolio_ids: Vec<u32>,
    company_ids: Vec<String>,
}

impl RemoveCompaniesFromPortfoliosRequest {
    pub fn new(
        portfolio_ids: impl Into<Vec<u32>>,
        company_ids: impl Into<Vec<String>>,
    ) -> Result<Self, ValidationError> {
        let portfolio_ids = portfolio_ids.into();
        let company_ids = company_ids.into();
        require_ids("portfolio_ids", &portfolio_ids)?;
        require_ids("company_ids", &company_ids)?;

        Ok(Self {
            portfolio_ids,
            company_ids,
        })
    }
}

impl SoapRequest for RemoveCompaniesFromPortfoliosRequest {
    const OPERATION: Operation = Operation::RemoveCompaniesFromPortfolios;

    fn body(&self) -> Vec<XmlNode> {
        vec![
            portfolio_ids_node(&self.portfolio_ids),
            XmlNode::new(oper("companyIds")).with_children(
                self.company_ids
                    .iter()
                    .map(|id| XmlNode::leaf(arr("string"), id.as_str())),
            ),
        ]
    }
}
