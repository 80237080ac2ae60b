//! Connectivity probe against the explorer API

use crate::api::ExplorerClient;
use crate::config::AppConfig;
use crate::errors::AppResult;
use clap::Args;

#[derive(Args)]
pub struct TestApiCommand {
    /// Explorer base URL
    #[arg(long)]
    pub base_url: Option<String>,
}

impl TestApiCommand {
    pub async fn run(self) -> AppResult<()> {
        let mut config = AppConfig::get_defaults()?;
        if let Some(base_url) = self.base_url {
            config.explorer.base_url = base_url;
        }

        let base_url = config.explorer.base_url.clone();
        let client = ExplorerClient::new(config.explorer)?;
        client.test_connectivity().await?;

        println!("Explorer API at {} is reachable", base_url);
        Ok(())
    }
}
