//! Command-line interface

pub mod commands;

use crate::errors::AppResult;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "btc-address-analyser")]
#[command(about = "Bitcoin address transaction statistics via the Blockchain.info explorer")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyse addresses and write the CSV report
    Analyse(commands::analyse::AnalyseCommand),
    /// Fetch one address's raw transaction history as JSON
    Fetch(commands::fetch::FetchCommand),
    /// Check connectivity to the explorer API
    TestApi(commands::test_api::TestApiCommand),
}

pub async fn run() -> AppResult<()> {
    // Default to error-level logging unless RUST_LOG says otherwise
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyse(cmd) => cmd.run().await,
        Commands::Fetch(cmd) => cmd.run().await,
        Commands::TestApi(cmd) => cmd.run().await,
    }
}
