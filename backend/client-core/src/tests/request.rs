use crate::error::ValidationError;
use crate::request::{
    AddCompaniesToPortfoliosRequest, CompanyReportRequest, CreatePortfolioRequest,
    FindCompanyRequest, GetPortfoliosRequest, ListMonitoredCompanies, MatchType, PortfolioCompany,
    RemoveCompaniesFromPortfoliosRequest, RemovePortfoliosRequest, SearchCriteria,
    SetDefaultChangesCheckPeriodRequest, SetMonitoringRulesRequest, SoapRequest,
};
use crate::xml::XmlNode;

use std::time::{Duration, UNIX_EPOCH};

fn texts<'a>(node: &'a XmlNode, local_name: &'a str) -> Vec<&'a str> {
    node.children_named(local_name).map(XmlNode::text).collect()
}

// ============================================
// FIND COMPANY
// ============================================

#[test]
fn given_registration_search_when_built_then_message_has_country_and_number() {
    let request =
        FindCompanyRequest::new(SearchCriteria::new("GB").registration_number("RN123"))
            .expect("valid criteria");

    let message = request.message();

    assert_eq!(message.name, "oper:FindCompanies");
    assert_eq!(
        message.path(&["countries", "CountryCode"]).map(|n| n.name.as_str()),
        Some("cred:CountryCode")
    );
    assert_eq!(
        message.path(&["countries", "CountryCode"]).map(XmlNode::text),
        Some("GB")
    );
    assert_eq!(
        message.path(&["searchCriteria", "RegistrationNumber"]).map(XmlNode::text),
        Some("RN123")
    );
    assert!(message.path(&["searchCriteria", "Name"]).is_none());
}

#[test]
fn given_missing_country_when_validated_then_missing_error() {
    let criteria = SearchCriteria {
        registration_number: Some("RN123".to_string()),
        ..SearchCriteria::default()
    };

    let error = FindCompanyRequest::new(criteria).expect_err("should fail");

    assert!(matches!(
        error,
        ValidationError::Missing {
            field: "country_code",
            ..
        }
    ));
}

/// **VALUE**: Verifies the "exactly one identifier" rule in every combination.
///
/// **WHY THIS MATTERS**: The service silently picks one identifier when several
/// are sent, returning results for a company the caller never asked about.
///
/// **BUG THIS CATCHES**: Would catch an XOR-only check, which lets all three
/// identifiers through.
#[test]
fn given_identifier_combinations_when_validated_then_only_single_identifier_passes() {
    let base = SearchCriteria::new("DE");
    let cases = [
        (base.clone(), false),
        (base.clone().registration_number("RN"), true),
        (base.clone().company_name("Mimes Inc"), true),
        (base.clone().vat_number("942404110"), true),
        (base.clone().registration_number("RN").company_name("Mimes"), false),
        (base.clone().registration_number("RN").vat_number("942404110"), false),
        (base.clone().company_name("Mimes").vat_number("942404110"), false),
        (
            base.clone()
                .registration_number("RN")
                .company_name("Mimes")
                .vat_number("942404110"),
            false,
        ),
    ];

    for (criteria, valid) in cases {
        let result = criteria.validate();
        assert_eq!(result.is_ok(), valid, "{criteria:?}");
        if !valid {
            assert!(matches!(result, Err(ValidationError::Conflicting { .. })));
        }
    }
}

/// **VALUE**: Verifies address criteria are German-only.
///
/// **BUG THIS CATCHES**: Would catch a city filter being sent for a country that
/// rejects it, which fails the whole search at the service.
#[test]
fn given_city_outside_germany_when_validated_then_unsupported() {
    let gb = SearchCriteria::new("GB").registration_number("RN123").city("Berlin");
    let de = SearchCriteria::new("DE").registration_number("RN123").city("Berlin");

    let error = gb.validate().expect_err("should fail");

    assert!(matches!(error, ValidationError::Unsupported { .. }));
    assert!(error.to_string().contains("city is only supported for German searches"));
    assert!(de.validate().is_ok());
}

#[test]
fn given_postal_code_outside_germany_when_validated_then_unsupported() {
    let gb = SearchCriteria::new("GB").registration_number("RN123").postal_code("41199");
    let de = SearchCriteria::new("DE").registration_number("RN123").postal_code("41199");

    assert!(matches!(
        gb.validate(),
        Err(ValidationError::Unsupported { .. })
    ));
    assert!(de.validate().is_ok());
}

#[test]
fn given_vat_number_when_validated_then_country_must_support_it() {
    let gb = SearchCriteria::new("GB").vat_number("942404110");
    let us = SearchCriteria::new("US").vat_number("942404110");

    assert!(matches!(
        gb.validate(),
        Err(ValidationError::Unsupported { .. })
    ));
    assert!(us.validate().is_ok());
}

#[test]
fn given_german_city_and_postal_code_when_built_then_single_address_element() {
    let request = FindCompanyRequest::new(
        SearchCriteria::new("DE")
            .registration_number("HRB 1234")
            .city("Berlin")
            .postal_code("10115"),
    )
    .expect("valid criteria");

    let criteria = request.message();
    let criteria = criteria.child("searchCriteria").expect("searchCriteria");

    assert_eq!(criteria.children_named("Address").count(), 1);
    assert_eq!(
        criteria.path(&["Address", "City"]).map(XmlNode::text),
        Some("Berlin")
    );
    assert_eq!(
        criteria.path(&["Address", "PostalCode"]).map(XmlNode::text),
        Some("10115")
    );
}

/// **VALUE**: Verifies the match type is chosen per country.
///
/// **WHY THIS MATTERS**: France rejects `MatchBlock`; a French name search with
/// the default would always fail.
#[test]
fn given_name_search_when_built_then_match_type_depends_on_country() {
    let fr = FindCompanyRequest::new(SearchCriteria::new("FR").company_name("Mimes Inc"))
        .expect("valid criteria")
        .message();
    let gb = FindCompanyRequest::new(SearchCriteria::new("GB").company_name("Mimes Inc"))
        .expect("valid criteria")
        .message();

    let match_type = |message: &XmlNode| {
        message
            .path(&["searchCriteria", "Name"])
            .and_then(|name| name.attribute("MatchType"))
            .map(str::to_string)
    };

    assert_eq!(match_type(&fr).as_deref(), Some("MatchBeginning"));
    assert_eq!(match_type(&gb).as_deref(), Some("MatchBlock"));
    assert_eq!(MatchType::for_country("fr"), MatchType::MatchBeginning);
}

// ============================================
// REPORTS & PORTFOLIOS
// ============================================

#[test]
fn given_custom_data_when_report_built_then_entries_keyed() {
    let message = CompanyReportRequest::new(
        "GB003/0/07495895",
        [
            ("foo".to_string(), "bar".to_string()),
            ("bar".to_string(), "baz".to_string()),
        ],
    )
    .expect("valid request")
    .message();

    assert_eq!(message.name, "oper:RetrieveCompanyOnlineReport");
    assert_eq!(message.child_text("companyId"), Some("GB003/0/07495895"));
    assert_eq!(message.child_text("reportType"), Some("Full"));
    assert_eq!(message.child_text("language"), Some("EN"));

    let entries = message
        .path(&["customData", "Entries"])
        .expect("custom data entries");
    let keyed: Vec<(Option<&str>, &str)> = entries
        .children_named("Entry")
        .map(|entry| (entry.attribute("key"), entry.text()))
        .collect();
    assert_eq!(keyed, [(Some("foo"), "bar"), (Some("bar"), "baz")]);
}

#[test]
fn given_no_custom_data_when_report_built_then_no_custom_data_element() {
    let message = CompanyReportRequest::new("GB003/0/07495895", Vec::new())
        .expect("valid request")
        .message();

    assert!(message.child("customData").is_none());
    assert!(CompanyReportRequest::new(" ", Vec::new()).is_err());
}

/// **VALUE**: Verifies portfolio ids use the serialization-arrays namespace.
///
/// **BUG THIS CATCHES**: Would catch the ids being bound to the operations
/// namespace, which the service ignores, returning every portfolio instead.
#[test]
fn given_portfolio_ids_when_built_then_arr_unsigned_ints() {
    let message = GetPortfoliosRequest::new(vec![14_462, 14_461]).message();
    let ids = message.child("portfolioIds").expect("portfolioIds");

    assert!(ids.children.iter().all(|id| id.name == "arr:unsignedInt"));
    assert_eq!(texts(ids, "unsignedInt"), ["14462", "14461"]);
}

#[test]
fn given_create_portfolio_when_built_then_settings_attributes() {
    let message = CreatePortfolioRequest::new(true, "development_test")
        .expect("valid request")
        .message();
    let settings = message.child("settings").expect("settings");

    assert_eq!(settings.attribute("Enabled"), Some("true"));
    assert_eq!(settings.attribute("Name"), Some("development_test"));
    assert!(CreatePortfolioRequest::new(false, "").is_err());
}

#[test]
fn given_empty_id_lists_when_built_then_missing_errors() {
    assert!(RemovePortfoliosRequest::new(Vec::<u32>::new()).is_err());
    assert!(AddCompaniesToPortfoliosRequest::new(vec![1], Vec::<PortfolioCompany>::new()).is_err());
    assert!(
        AddCompaniesToPortfoliosRequest::new(Vec::<u32>::new(), vec![PortfolioCompany::new("GB001", "x")])
            .is_err()
    );
    assert!(RemoveCompaniesFromPortfoliosRequest::new(vec![1], Vec::<String>::new()).is_err());
}

#[test]
fn given_companies_when_added_then_keyed_company_elements() {
    let message = AddCompaniesToPortfoliosRequest::new(
        vec![12_422],
        vec![
            PortfolioCompany::new("GB001/0/1", "First"),
            PortfolioCompany::new("GB001/0/2", "Second"),
        ],
    )
    .expect("valid request")
    .message();

    let companies = message
        .path(&["companies", "Companies"])
        .expect("companies");
    let keys: Vec<Option<&str>> = companies
        .children_named("Company")
        .map(|company| company.attribute("key"))
        .collect();

    assert_eq!(keys, [Some("GB001/0/1"), Some("GB001/0/2")]);
    assert_eq!(texts(companies, "Company"), ["First", "Second"]);
}

#[test]
fn given_company_ids_when_removed_then_arr_strings() {
    let message = RemoveCompaniesFromPortfoliosRequest::new(
        vec![1, 2],
        vec!["GB001/0/1".to_string()],
    )
    .expect("valid request")
    .message();

    let ids = message.child("companyIds").expect("companyIds");
    assert_eq!(ids.children[0].name, "arr:string");
    assert_eq!(texts(ids, "string"), ["GB001/0/1"]);
}

// ============================================
// MONITORING
// ============================================

#[test]
fn given_event_codes_when_rules_built_then_one_enabled_rule_each() {
    let message = SetMonitoringRulesRequest::new(
        12_422,
        vec!["CR".to_string(), "PR".to_string()],
    )
    .message();

    assert_eq!(message.child_text("portfolioId"), Some("12422"));
    let rules: Vec<&XmlNode> = message
        .child("newRules")
        .expect("newRules")
        .children_named("Rule")
        .collect();
    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0].attribute("EventCode"), Some("CR"));
    assert_eq!(rules[1].attribute("EventCode"), Some("PR"));
    assert!(rules.iter().all(|rule| rule.attribute("Enabled") == Some("true")
        && rule.attribute("MatchAllConditions") == Some("true")));
}

#[test]
fn given_changed_since_when_listing_built_then_rfc3339_and_changed_only() {
    let since = UNIX_EPOCH + Duration::from_secs(1_704_067_200);
    let query = ListMonitoredCompanies::new(vec![7])
        .page(10, 50)
        .changed_since(since);

    let message = query.message();

    assert!(query.validate().is_ok());
    assert_eq!(message.child_text("changedSince"), Some("2024-01-01T00:00:00Z"));
    assert_eq!(message.child_text("changedOnly"), Some("true"));
    assert_eq!(message.child_text("pageSize"), Some("50"));
    assert_eq!(message.child_text("firstPosition"), Some("10"));
}

#[test]
fn given_invalid_listing_when_validated_then_errors() {
    assert!(ListMonitoredCompanies::new(Vec::<u32>::new()).validate().is_err());
    assert!(matches!(
        ListMonitoredCompanies::new(vec![1]).page(0, 0).validate(),
        Err(ValidationError::OutOfRange { .. })
    ));
    assert!(ListMonitoredCompanies::new(vec![1]).message().child("changedSince").is_none());
}

#[test]
fn given_zero_days_when_check_period_built_then_out_of_range() {
    assert!(matches!(
        SetDefaultChangesCheckPeriodRequest::new(0),
        Err(ValidationError::OutOfRange { .. })
    ));
    assert_eq!(
        SetDefaultChangesCheckPeriodRequest::new(14)
            .expect("valid request")
            .message()
            .child_text("days"),
        Some("14")
    );
}
