//! Runs a parsed [`Command`] against the service and renders the result as JSON.

use crate::cli::{Cli, Command, FindArgs, MonitoredArgs};
use crate::error::CliError;

use creditsafe_core::{
    ClientConfig, ClientSettings, CreditsafeClient, ListMonitoredCompanies, PortfolioCompany,
    SearchCriteria,
};

use std::path::PathBuf;

use log::{debug, info};
use serde::Serialize;
use serde_json::{Value, json};

const APP_DIR_NAME: &str = "creditsafe";

/// `--config-dir`, or `<platform config dir>/creditsafe`.
pub fn config_dir(cli: &Cli) -> Result<PathBuf, CliError> {
    match &cli.config_dir {
        Some(dir) => Ok(dir.clone()),
        None => dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or_else(|| CliError::cli("Failed to determine config directory")),
    }
}

/// `--log-dir`, or `<platform local data dir>/creditsafe/logs`.
pub fn log_dir(cli: &Cli) -> Result<PathBuf, CliError> {
    match &cli.log_dir {
        Some(dir) => Ok(dir.clone()),
        None => dirs::data_local_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join("logs"))
            .ok_or_else(|| CliError::cli("Failed to determine log directory")),
    }
}

/// Config file, then environment, then command-line flags.
pub fn load_config(cli: &Cli) -> Result<ClientConfig, CliError> {
    let config_dir = config_dir(cli)?;
    let settings = ClientSettings::load(&config_dir).map_err(|e| CliError::config(&e))?;
    let mut config = ClientConfig::from_env(settings).map_err(|e| CliError::config(&e))?;

    if let Some(environment) = cli.environment {
        config = config.with_environment(environment);
    }

    Ok(config)
}

pub fn search_criteria(args: FindArgs) -> SearchCriteria {
    let FindArgs {
        country,
        registration_number,
        company_name,
        vat_number,
        city,
        postal_code,
    } = args;

    let mut criteria = SearchCriteria::new(country);
    if let Some(value) = registration_number {
        criteria = criteria.registration_number(value);
    }
    if let Some(value) = company_name {
        criteria = criteria.company_name(value);
    }
    if let Some(value) = vat_number {
        criteria = criteria.vat_number(value);
    }
    if let Some(value) = city {
        criteria = criteria.city(value);
    }
    if let Some(value) = postal_code {
        criteria = criteria.postal_code(value);
    }
    criteria
}

pub fn monitored_query(args: MonitoredArgs) -> ListMonitoredCompanies {
    let query = ListMonitoredCompanies::new(args.portfolio_ids)
        .page(args.first_position, args.page_size);

    match args.changed_since {
        Some(since) => query.changed_since(since),
        None => query,
    }
}

/// Execute `command` and return what should be printed on stdout.
pub async fn execute(client: &CreditsafeClient, command: Command) -> Result<Value, CliError> {
    debug!("Executing {command:?}");

    match command {
        Command::Find(args) => {
            let companies = client
                .find_company(search_criteria(args))
                .await
                .map_err(|e| CliError::core(&e))?;
            // No results prints an empty list
            to_json(&companies.unwrap_or_default())
        }
        Command::Report {
            company_id,
            custom_data,
        } => {
            let report = client
                .company_report(&company_id, custom_data)
                .await
                .map_err(|e| CliError::core(&e))?;
            to_json(&report)
        }
        Command::Portfolios { portfolio_ids } => {
            let portfolios = client
                .get_portfolios(&portfolio_ids)
                .await
                .map_err(|e| CliError::core(&e))?;
            to_json(&portfolios)
        }
        Command::CreatePortfolio { name, disabled } => {
            let result = client
                .create_portfolio(!disabled, &name)
                .await
                .map_err(|e| CliError::core(&e))?;
            info!("Created portfolio '{name}'");
            to_json(&result)
        }
        Command::RemovePortfolios { portfolio_ids } => {
            client
                .remove_portfolios(&portfolio_ids)
                .await
                .map_err(|e| CliError::core(&e))?;
            Ok(json!({ "removed": portfolio_ids }))
        }
        Command::AddCompanies {
            portfolio_ids,
            companies,
        } => {
            let companies: Vec<PortfolioCompany> = companies
                .into_iter()
                .map(|(id, description)| PortfolioCompany::new(id, description))
                .collect();
            let added = companies.len();
            client
                .add_companies_to_portfolios(&portfolio_ids, companies)
                .await
                .map_err(|e| CliError::core(&e))?;
            Ok(json!({ "portfolios": portfolio_ids, "added": added }))
        }
        Command::RemoveCompanies {
            portfolio_ids,
            company_ids,
        } => {
            client
                .remove_companies_from_portfolios(&portfolio_ids, company_ids.clone())
                .await
                .map_err(|e| CliError::core(&e))?;
            Ok(json!({ "portfolios": portfolio_ids, "removed": company_ids }))
        }
        Command::Rules { portfolio_id } => {
            let rules = client
                .get_portfolio_monitoring_rules(portfolio_id)
                .await
                .map_err(|e| CliError::core(&e))?;
            to_json(&rules)
        }
        Command::SetRules {
            portfolio_id,
            event_codes,
        } => {
            client
                .set_portfolio_monitoring_rules(portfolio_id, event_codes.clone())
                .await
                .map_err(|e| CliError::core(&e))?;
            Ok(json!({ "portfolio": portfolio_id, "rules": event_codes }))
        }
        Command::Monitored(args) => {
            let listing = client
                .list_monitored_companies(monitored_query(args))
                .await
                .map_err(|e| CliError::core(&e))?;
            for description in listing.descriptions() {
                info!("Service message: {description}");
            }
            to_json(&listing)
        }
        Command::CheckPeriod { days } => {
            client
                .set_default_changes_check_period(days)
                .await
                .map_err(|e| CliError::core(&e))?;
            Ok(json!({ "days": days }))
        }
        Command::Events { country, language } => {
            let events = client
                .get_supported_change_events(&language, &country)
                .await
                .map_err(|e| CliError::core(&e))?;
            to_json(&events)
        }
    }
}

/// Render `value` for stdout.
pub fn render(value: &Value, pretty: bool) -> Result<String, CliError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.map_err(|e| CliError::output(&e))
}

fn to_json<T: Serialize>(value: &T) -> Result<Value, CliError> {
    serde_json::to_value(value).map_err(|e| CliError::output(&e))
}
