mod cli;
mod commands;
mod error;
mod repl;

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use fxbook_core::{HttpOrderGateway, OrderGateway, PairUniverse, ReqwestHttpClient};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::error::CliError;
use crate::repl::Repl;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run() -> Result<ExitCode, CliError> {
    let cli = Cli::parse();
    init_tracing();

    let http = ReqwestHttpClient::new(Duration::from_millis(cli.connect_timeout_ms));
    let gateway: Arc<dyn OrderGateway> = Arc::new(
        HttpOrderGateway::new(Arc::new(http), &cli.base_url).with_timeout_ms(cli.timeout_ms),
    );

    println!("FX OrderBook CLI Application");
    println!("Type 'help' for available commands or 'exit' to quit.");

    // One connectivity probe before accepting commands.
    if let Err(error) = gateway.rates().await {
        tracing::warn!(%error, "startup connectivity check failed");
        eprintln!();
        eprintln!("Error: Could not connect to the Order Service!");
        eprintln!("Please ensure the Order Service is running on {}", cli.base_url);
        eprintln!("The application cannot function without the Order Service.");
        eprintln!();
        return Ok(ExitCode::from(
            CliError::Startup {
                base_url: cli.base_url,
            }
            .exit_code(),
        ));
    }
    println!("Successfully connected to FX service");

    let mut repl = Repl::new(gateway, PairUniverse::default());
    repl.run().await?;

    Ok(ExitCode::SUCCESS)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
