//! Fetch command: dump one address's raw history as JSON

use crate::api::ExplorerClient;
use crate::config::AppConfig;
use crate::errors::AppResult;
use clap::Args;
use std::fs;
use std::path::PathBuf;

#[derive(Args)]
pub struct FetchCommand {
    /// Bitcoin address to fetch
    pub address: String,

    /// Output file for the raw JSON (defaults to <address>.json)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Maximum transactions to fetch
    #[arg(long)]
    pub limit: Option<usize>,
}

impl FetchCommand {
    pub async fn run(self) -> AppResult<()> {
        let mut config = AppConfig::get_defaults()?;
        if let Some(limit) = self.limit {
            config.explorer.tx_limit = limit;
        }

        let client = ExplorerClient::new(config.explorer)?;
        let raw = client.fetch_address_raw(&self.address).await?;

        let tx_count = raw
            .get("txs")
            .and_then(|txs| txs.as_array())
            .map(|txs| txs.len())
            .unwrap_or(0);

        let path = self
            .output
            .unwrap_or_else(|| PathBuf::from(format!("{}.json", self.address)));
        fs::write(&path, serde_json::to_string_pretty(&raw)?)?;

        println!(
            "Wrote {} transactions for {} to {}",
            tx_count,
            self.address,
            path.display()
        );
        Ok(())
    }
}
