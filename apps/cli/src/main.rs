use creditsafe_cli::cli::Cli;
use creditsafe_cli::commands::{execute, load_config, log_dir, render};
use creditsafe_cli::error::CliError;
use creditsafe_cli::logger::{initialize as LoggerInitialize, level_for};

use creditsafe_core::CreditsafeClient;

use std::fs::create_dir_all;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    match run(cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            match render_error(&e, pretty) {
                Some(json) => eprintln!("{json}"),
                None => eprintln!("{e}"),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<String, CliError> {
    let log_dir = log_dir(&cli)?;
    create_dir_all(&log_dir)
        .map_err(|e| CliError::cli(format!("Failed to create log directory: {e}")))?;

    // Logger first, so config loading is visible
    LoggerInitialize(&log_dir, level_for(cli.verbose))?;
    info!("Log directory: {}", log_dir.display());

    let config = load_config(&cli)?;
    let client = CreditsafeClient::new(config).map_err(|e| CliError::config(&e))?;
    info!("Using {} ({})", client.endpoint(), client.environment());

    let value = execute(&client, cli.command).await?;
    render(&value, cli.pretty)
}

fn render_error(error: &CliError, pretty: bool) -> Option<String> {
    let value = serde_json::to_value(error).ok()?;
    render(&value, pretty).ok()
}
