use crate::cli::{Cli, Command, parse_key_value};

use creditsafe_core::Environment;
use creditsafe_core::request::monitoring::DEFAULT_PAGE_SIZE;

use clap::{CommandFactory, Parser};

#[test]
fn given_definition_when_checked_then_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn given_find_with_global_flags_when_parsed_then_fields_set() {
    let cli = Cli::try_parse_from([
        "creditsafe",
        "find",
        "--country",
        "DE",
        "--name",
        "Siemens",
        "--city",
        "Berlin",
        "--environment",
        "TEST",
        "-vv",
    ])
    .expect("should parse");

    assert_eq!(cli.environment, Some(Environment::Test));
    assert_eq!(cli.verbose, 2);
    match cli.command {
        Command::Find(args) => {
            assert_eq!(args.country, "DE");
            assert_eq!(args.company_name.as_deref(), Some("Siemens"));
            assert_eq!(args.city.as_deref(), Some("Berlin"));
            assert!(args.registration_number.is_none());
        }
        other => panic!("expected find, got {other:?}"),
    }
}

#[test]
fn given_unknown_environment_when_parsed_then_rejected() {
    let result = Cli::try_parse_from(["creditsafe", "--environment", "staging", "rules", "1"]);

    assert!(result.is_err());
}

#[test]
fn given_report_with_custom_data_when_parsed_then_pairs_collected() {
    let cli = Cli::try_parse_from([
        "creditsafe",
        "report",
        "GB003/0/07495895",
        "--custom-data",
        "foo=bar",
        "--custom-data",
        "url=https://example.com/?a=b",
    ])
    .expect("should parse");

    match cli.command {
        Command::Report {
            company_id,
            custom_data,
        } => {
            assert_eq!(company_id, "GB003/0/07495895");
            assert_eq!(
                custom_data,
                [
                    ("foo".to_string(), "bar".to_string()),
                    ("url".to_string(), "https://example.com/?a=b".to_string()),
                ]
            );
        }
        other => panic!("expected report, got {other:?}"),
    }
}

#[test]
fn given_monitored_without_paging_when_parsed_then_defaults() {
    let cli = Cli::try_parse_from(["creditsafe", "monitored", "14462", "14461"])
        .expect("should parse");

    match cli.command {
        Command::Monitored(args) => {
            assert_eq!(args.portfolio_ids, [14_462, 14_461]);
            assert_eq!(args.first_position, 0);
            assert_eq!(args.page_size, DEFAULT_PAGE_SIZE);
            assert!(args.changed_since.is_none());
        }
        other => panic!("expected monitored, got {other:?}"),
    }
}

/// **BUG THIS CATCHES**: Would catch removals running against every portfolio
/// because an empty id list slipped through.
#[test]
fn given_remove_portfolios_without_ids_when_parsed_then_rejected() {
    assert!(Cli::try_parse_from(["creditsafe", "remove-portfolios"]).is_err());
    assert!(Cli::try_parse_from(["creditsafe", "portfolios"]).is_ok());
}

#[test]
fn given_key_value_inputs_when_parsed_then_split_at_first_equals() {
    assert_eq!(
        parse_key_value("a=b=c"),
        Ok(("a".to_string(), "b=c".to_string()))
    );
    assert_eq!(parse_key_value("a="), Ok(("a".to_string(), String::new())));
    assert!(parse_key_value("=b").is_err());
    assert!(parse_key_value("novalue").is_err());
}
