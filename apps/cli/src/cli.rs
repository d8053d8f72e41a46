//! Command-line surface of the `creditsafe` binary.

use creditsafe_core::Environment;
use creditsafe_core::request::monitoring::DEFAULT_PAGE_SIZE;

use std::path::PathBuf;
use std::time::SystemTime;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "creditsafe", version, about = "Query the Creditsafe GlobalData service")]
pub struct Cli {
    /// Service environment; overrides the config file and CREDITSAFE_ENVIRONMENT
    #[arg(long, global = true)]
    pub environment: Option<Environment>,

    /// Directory holding creditsafe.toml
    #[arg(long, global = true, env = "CREDITSAFE_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    #[arg(long, global = true, env = "CREDITSAFE_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// More output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Indent JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search for companies in one country
    Find(FindArgs),

    /// Fetch the full online report for a company
    Report {
        company_id: String,

        /// Custom data attached to the report request, as KEY=VALUE
        #[arg(long = "custom-data", value_parser = parse_key_value)]
        custom_data: Vec<(String, String)>,
    },

    /// List portfolios (all of them when no ids are given)
    Portfolios { portfolio_ids: Vec<u32> },

    CreatePortfolio {
        name: String,

        /// Create with information processing disabled
        #[arg(long)]
        disabled: bool,
    },

    RemovePortfolios {
        #[arg(required = true)]
        portfolio_ids: Vec<u32>,
    },

    /// Add companies to portfolios; each company is ID=DESCRIPTION
    AddCompanies {
        #[arg(long = "portfolio", required = true)]
        portfolio_ids: Vec<u32>,

        #[arg(required = true, value_parser = parse_key_value)]
        companies: Vec<(String, String)>,
    },

    RemoveCompanies {
        #[arg(long = "portfolio", required = true)]
        portfolio_ids: Vec<u32>,

        #[arg(required = true)]
        company_ids: Vec<String>,
    },

    /// Show the monitoring rules of a portfolio
    Rules { portfolio_id: u32 },

    /// Replace the monitoring rules of a portfolio
    SetRules {
        portfolio_id: u32,

        #[arg(required = true)]
        event_codes: Vec<String>,
    },

    /// List monitored companies
    Monitored(MonitoredArgs),

    /// Set the default changes check period, in days
    CheckPeriod { days: u32 },

    /// List the change events that can be monitored in a country
    Events {
        country: String,

        #[arg(long, default_value = "EN")]
        language: String,
    },
}

#[derive(Debug, Args)]
pub struct FindArgs {
    /// ISO country code, e.g. GB
    #[arg(long)]
    pub country: String,

    #[arg(long)]
    pub registration_number: Option<String>,

    #[arg(long = "name")]
    pub company_name: Option<String>,

    #[arg(long = "vat")]
    pub vat_number: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    #[arg(long)]
    pub postal_code: Option<String>,
}

#[derive(Debug, Args)]
pub struct MonitoredArgs {
    #[arg(required = true)]
    pub portfolio_ids: Vec<u32>,

    /// Only companies changed since this RFC 3339 timestamp
    #[arg(long, value_parser = humantime::parse_rfc3339_weak)]
    pub changed_since: Option<SystemTime>,

    #[arg(long, default_value_t = 0)]
    pub first_position: u32,

    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: u32,
}

/// Split `KEY=VALUE` at the first `=`.
pub fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}
