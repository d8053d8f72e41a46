use super::{SoapRequest, portfolio_ids_node, require_ids};
use crate::error::ValidationError;
use crate::namespace::{dat, oper};
use crate::operation::Operation;
use crate::xml::XmlNode;

use std::time::SystemTime;

pub const DEFAULT_PAGE_SIZE: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetMonitoringRulesRequest {
    portfolio_id: u32,
}

impl GetMonitoringRulesRequest {
    pub fn new(portfolio_id: u32) -> Self {
        Self { portfolio_id }
    }
}

impl SoapRequest for GetMonitoringRulesRequest {
    const OPERATION: Operation = Operation::GetMonitoringRules;

    fn body(&self) -> Vec<XmlNode> {
        vec![XmlNode::leaf(oper("portfolioId"), self.portfolio_id.to_string())]
    }
}

/// Replaces a portfolio's rules with one enabled rule per event code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetMonitoringRulesRequest {
    portfolio_id: u32,
    event_codes: Vec<String>,
}

impl SetMonitoringRulesRequest {
    pub fn new(portfolio_id: u32, event_codes: impl Into<Vec<String>>) -> Self {
        Self {
            portfolio_id,
            event_codes: event_codes.into(),
        }
    }
}

impl SoapRequest for SetMonitoringRulesRequest {
    const OPERATION: Operation = Operation::SetMonitoringRules;

    fn body(&self) -> Vec<XmlNode> {
        let rules = self.event_codes.iter().map(|code| {
            XmlNode::new(dat("Rule"))
                .with_attribute("Enabled", "true")
                .with_attribute("EventCode", code.as_str())
                .with_attribute("MatchAllConditions", "true")
        });

        vec![
            XmlNode::leaf(oper("portfolioId"), self.portfolio_id.to_string()),
            XmlNode::new(oper("newRules")).with_children(rules),
        ]
    }
}

/// Paged listing of the companies monitored in a set of portfolios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListMonitoredCompanies {
    pub portfolio_ids: Vec<u32>,
    pub first_position: u32,
    pub page_size: u32,
    /// Only report companies changed after this instant.
    pub changed_since: Option<SystemTime>,
    pub changed_only: bool,
}

impl ListMonitoredCompanies {
    pub fn new(portfolio_ids: impl Into<Vec<u32>>) -> Self {
        Self {
            portfolio_ids: portfolio_ids.into(),
            first_position: 0,
            page_size: DEFAULT_PAGE_SIZE,
            changed_since: None,
            changed_only: false,
        }
    }

    pub fn page(mut self, first_position: u32, page_size: u32) -> Self {
        self.first_position = first_position;
        self.page_size = page_size;
        self
    }

    pub fn changed_since(mut self, since: SystemTime) -> Self {
        self.changed_since = Some(since);
        self.changed_only = true;
        self
    }

    pub fn changed_only(mut self, changed_only: bool) -> Self {
        self.changed_only = changed_only;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_ids("portfolio_ids", &self.portfolio_ids)?;

        if self.page_size == 0 {
            return Err(ValidationError::out_of_range(
                "page_size must be greater than 0",
            ));
        }

        Ok(())
    }
}

impl SoapRequest for ListMonitoredCompanies {
    const OPERATION: Operation = Operation::ListMonitoredCompanies;

    fn body(&self) -> Vec<XmlNode> {
        let mut body = vec![
            portfolio_ids_node(&self.portfolio_ids),
            XmlNode::leaf(oper("changedOnly"), self.changed_only.to_string()),
        ];

        if let Some(since) = self.changed_since {
            body.push(XmlNode::leaf(
                oper("changedSince"),
                humantime::format_rfc3339_seconds(since).to_string(),
            ));
        }

        body.push(XmlNode::leaf(oper("pageSize"), self.page_size.to_string()));
        body.push(XmlNode::leaf(
            oper("firstPosition"),
            self.first_position.to_string(),
        ));
        body
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetDefaultChangesCheckPeriodRequest {
    days: u32,
}

impl SetDefaultChangesCheckPeriodRequest {
    pub fn new(days: u32) -> Result<Self, ValidationError> {
        if days == 0 {
            return Err(ValidationError::out_of_range("days must be greater than 0"));
        }
        Ok(Self { days })
    }
}

impl SoapRequest for SetDefaultChangesCheckPeriodRequest {
    const OPERATION: Operation = Operation::SetDefaultChangesCheckPeriod;

    fn body(&self) -> Vec<XmlNode> {
        vec![XmlNode::leaf(oper("days"), self.days.to_string())]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetSupportedChangeEventsRequest {
    language: String,
    country: String,
}

impl GetSupportedChangeEventsRequest {
    pub fn new(
        language: impl Into<String>,
        country: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let language = language.into();
        let country = country.into();

        if language.trim().is_empty() {
            return Err(ValidationError::missing("language"));
        }
        if country.trim().is_empty() {
            return Err(ValidationError::missing("country"));
        }

        Ok(Self { language, country })
    }
}

impl SoapRequest for GetSupportedChangeEventsRequest {
    const OPERATION: Operation = Operation::GetSupportedChangeEvents;

    fn body(&self) -> Vec<XmlNode> {
        vec![
            XmlNode::leaf(oper("language"), self.language.as_str()),
            XmlNode::leaf(oper("country"), self.country.as_str()),
        ]
    }
}
