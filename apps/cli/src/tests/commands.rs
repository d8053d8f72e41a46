use crate::cli::{Cli, Command, FindArgs, MonitoredArgs};
use crate::commands::{config_dir, log_dir, monitored_query, render, search_criteria};

use creditsafe_core::SearchCriteria;

use std::path::PathBuf;
use std::time::{Duration, UNIX_EPOCH};

use clap::Parser;
use serde_json::json;

#[test]
fn given_find_args_when_converted_then_only_given_fields_set() {
    let args = FindArgs {
        country: "GB".to_string(),
        registration_number: Some("07495895".to_string()),
        company_name: None,
        vat_number: None,
        city: None,
        postal_code: None,
    };

    let criteria = search_criteria(args);

    assert_eq!(
        criteria,
        SearchCriteria::new("GB").registration_number("07495895")
    );
    assert!(criteria.validate().is_ok());
}

#[test]
fn given_changed_since_when_query_built_then_changed_only_enabled() {
    let since = UNIX_EPOCH + Duration::from_secs(1_704_067_200);
    let args = MonitoredArgs {
        portfolio_ids: vec![1],
        changed_since: Some(since),
        first_position: 10,
        page_size: 50,
    };

    let query = monitored_query(args);

    assert_eq!(query.changed_since, Some(since));
    assert!(query.changed_only);
    assert_eq!(query.first_position, 10);
    assert_eq!(query.page_size, 50);
}

#[test]
fn given_explicit_dirs_when_resolved_then_used_verbatim() {
    let cli = Cli::try_parse_from([
        "creditsafe",
        "--config-dir",
        "/tmp/cs-config",
        "--log-dir",
        "/tmp/cs-logs",
        "check-period",
        "7",
    ])
    .expect("should parse");

    assert_eq!(config_dir(&cli).ok(), Some(PathBuf::from("/tmp/cs-config")));
    assert_eq!(log_dir(&cli).ok(), Some(PathBuf::from("/tmp/cs-logs")));
    assert!(matches!(cli.command, Command::CheckPeriod { days: 7 }));
}

#[test]
fn given_value_when_rendered_then_compact_or_pretty() {
    let value = json!({ "days": 7 });

    assert_eq!(render(&value, false).expect("render"), r#"{"days":7}"#);
    assert!(render(&value, true).expect("render").contains('\n'));
}
