use super::SoapRequest;
use super::country;
use super::match_type::MatchType;
use crate::error::ValidationError;
use crate::namespace::{cred, dat, oper};
use crate::operation::Operation;
use crate::xml::XmlNode;

/// Company search parameters.
///
/// `country_code` is required, and exactly one of `registration_number`,
/// `company_name` or `vat_number` must be set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub country_code: Option<String>,
    pub registration_number: Option<String>,
    pub company_name: Option<String>,
    pub vat_number: Option<String>,
    /// German searches only.
    pub city: Option<String>,
    /// German searches only.
    pub postal_code: Option<String>,
}

impl SearchCriteria {
    pub fn new(country_code: impl Into<String>) -> Self {
        Self {
            country_code: Some(country_code.into()),
            ..Self::default()
        }
    }

    pub fn registration_number(mut self, value: impl Into<String>) -> Self {
        self.registration_number = Some(value.into());
        self
    }

    pub fn company_name(mut self, value: impl Into<String>) -> Self {
        self.company_name = Some(value.into());
        self
    }

    pub fn vat_number(mut self, value: impl Into<String>) -> Self {
        self.vat_number = Some(value.into());
        self
    }

    pub fn city(mut self, value: impl Into<String>) -> Self {
        self.city = Some(value.into());
        self
    }

    pub fn postal_code(mut self, value: impl Into<String>) -> Self {
        self.postal_code = Some(value.into());
        self
    }

    fn identifier_count(&self) -> usize {
        [
            &self.registration_number,
            &self.company_name,
            &self.vat_number,
        ]
        .into_iter()
        .filter(|value| value.is_some())
        .count()
    }

    /// # Errors
    ///
    /// Returns a [`ValidationError`] describing the first rule the criteria break.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let Some(country_code) = self.country_code.as_deref() else {
            return Err(ValidationError::missing("country_code"));
        };

        if self.identifier_count() != 1 {
            return Err(ValidationError::conflicting(
                "only one of registration_number, company_name or vat_number is required search criteria",
            ));
        }

        if self.city.is_some() && !country::supports_address_search(country_code) {
            return Err(ValidationError::unsupported(
                "city is only supported for German searches",
            ));
        }

        if self.postal_code.is_some() && !country::supports_address_search(country_code) {
            return Err(ValidationError::unsupported(
                "Postal code is only supported for German searches",
            ));
        }

        if self.vat_number.is_some() && !country::supports_vat_number(country_code) {
            return Err(ValidationError::unsupported(
                "VAT number is not supported in this country",
            ));
        }

        Ok(())
    }
}

/// Validated `FindCompanies` payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCompanyRequest {
    criteria: SearchCriteria,
    country_code: String,
}

impl FindCompanyRequest {
    pub fn new(criteria: SearchCriteria) -> Result<Self, ValidationError> {
        criteria.validate()?;

        let country_code = criteria
            .country_code
            .clone()
            .ok_or_else(|| ValidationError::missing("country_code"))?;

        Ok(Self {
            criteria,
            country_code,
        })
    }

    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    pub fn match_type(&self) -> MatchType {
        MatchType::for_country(&self.country_code)
    }

    fn search_criteria_node(&self) -> XmlNode {
        let mut node = XmlNode::new(oper("searchCriteria"));

        if let Some(name) = &self.criteria.company_name {
            node.push_child(
                XmlNode::leaf(dat("Name"), name.as_str())
                    .with_attribute("MatchType", self.match_type().as_str()),
            );
        }

        if let Some(number) = &self.criteria.registration_number {
            node.push_child(XmlNode::leaf(dat("RegistrationNumber"), number.as_str()));
        }

        if let Some(number) = &self.criteria.vat_number {
            node.push_child(XmlNode::leaf(dat("VatNumber"), number.as_str()));
        }

        let address: Vec<XmlNode> = [
            ("City", &self.criteria.city),
            ("PostalCode", &self.criteria.postal_code),
        ]
        .into_iter()
        .filter_map(|(local, value)| value.as_deref().map(|v| XmlNode::leaf(dat(local), v)))
        .collect();

        if !address.is_empty() {
            node.push_child(XmlNode::new(dat("Address")).with_children(address));
        }

        node
    }
}

impl SoapRequest for FindCompanyRequest {
    const OPERATION: Operation = Operation::FindCompanies;

    fn body(&self) -> Vec<XmlNode> {
        vec![
            XmlNode::new(oper("countries"))
                .with_child(XmlNode::leaf(cred("CountryCode"), self.country_code.as_str())),
            self.search_criteria_node(),
        ]
    }
}
