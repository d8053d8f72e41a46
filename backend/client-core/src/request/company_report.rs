use super::SoapRequest;
use crate::error::ValidationError;
use crate::namespace::{dat, oper};
use crate::operation::Operation;
use crate::xml::XmlNode;

pub const REPORT_TYPE: &str = "Full";
pub const REPORT_LANGUAGE: &str = "EN";

/// Full online report for one company, optionally tagged with caller data
/// that the service echoes back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyReportRequest {
    company_id: String,
    custom_data: Vec<(String, String)>,
}

impl CompanyReportRequest {
    pub fn new(
        company_id: impl Into<String>,
        custom_data: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Self, ValidationError> {
        let company_id = company_id.into();
        if company_id.trim().is_empty() {
            return Err(ValidationError::missing("company_id"));
        }

        Ok(Self {
            company_id,
            custom_data: custom_data.into_iter().collect(),
        })
    }

    pub fn company_id(&self) -> &str {
        &self.company_id
    }
}

impl SoapRequest for CompanyReportRequest {
    const OPERATION: Operation = Operation::RetrieveCompanyOnlineReport;

    fn body(&self) -> Vec<XmlNode> {
        let mut body = vec![
            XmlNode::leaf(oper("companyId"), self.company_id.as_str()),
            XmlNode::leaf(oper("reportType"), REPORT_TYPE),
            XmlNode::leaf(oper("language"), REPORT_LANGUAGE),
        ];

        if !self.custom_data.is_empty() {
            let entries = self.custom_data.iter().map(|(key, value)| {
                XmlNode::leaf(dat("Entry"), value.as_str()).with_attribute("key", key.as_str())
            });

            body.push(
                XmlNode::new(oper("customData"))
                    .with_child(XmlNode::new(dat("Entries")).with_children(entries)),
            );
        }

        body
    }
}
