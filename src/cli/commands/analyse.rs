//! Analyse command: fetch, classify and report on a set of addresses

use crate::analysis::analyse_addresses;
use crate::api::ExplorerClient;
use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use crate::report::{print_console_summary, write_report};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Args)]
pub struct AnalyseCommand {
    /// Bitcoin addresses to analyse (overrides the addresses file)
    pub addresses: Vec<String>,

    /// File with one address per line
    #[arg(long)]
    pub addresses_file: Option<PathBuf>,

    /// Directory for the CSV report
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Maximum transactions to fetch per address
    #[arg(long)]
    pub limit: Option<usize>,

    /// Blockchain.info API code
    #[arg(long)]
    pub api_code: Option<String>,

    /// Explorer base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Skip the connectivity probe before analysing
    #[arg(long)]
    pub skip_connectivity_check: bool,
}

impl AnalyseCommand {
    pub async fn run(self) -> AppResult<()> {
        let mut config = AppConfig::get_defaults()?;

        if let Some(limit) = self.limit {
            config.explorer.tx_limit = limit;
        }
        if let Some(api_code) = self.api_code.clone() {
            config.explorer.api_code = api_code;
        }
        if let Some(base_url) = self.base_url.clone() {
            config.explorer.base_url = base_url;
        }

        let addresses = self.resolve_addresses(&config)?;
        if addresses.is_empty() {
            return Err(AppError::InvalidData(
                "no addresses to analyse: pass them as arguments or via --addresses-file"
                    .to_string(),
            ));
        }
        info!("Analysing {} addresses", addresses.len());

        let client = ExplorerClient::new(config.explorer.clone())?;

        if !self.skip_connectivity_check {
            match client.test_connectivity().await {
                Ok(()) => info!("Explorer API reachable"),
                Err(e) => warn!("Connectivity check failed, continuing anyway: {}", e),
            }
        }

        let delay = Duration::from_millis(config.explorer.inter_address_delay_ms);
        let reports = analyse_addresses(&client, &addresses, delay).await;

        if reports.is_empty() {
            return Err(AppError::InvalidData(
                "no addresses could be analysed".to_string(),
            ));
        }

        let output_dir = self.output_dir.unwrap_or(config.output.report_dir);
        let paths = write_report(&reports, &output_dir)?;

        println!("Report written to {}", output_dir.display());
        println!("  {}", paths.summary.display());
        println!("  {}", paths.detailed.display());
        println!("  {}", paths.guide.display());
        print_console_summary(&reports);

        Ok(())
    }

    /// Addresses from the command line take precedence over the file.
    fn resolve_addresses(&self, config: &AppConfig) -> AppResult<Vec<String>> {
        if !self.addresses.is_empty() {
            return Ok(self.addresses.clone());
        }

        let path = self
            .addresses_file
            .clone()
            .unwrap_or_else(|| config.paths.addresses_file.clone());
        let contents = fs::read_to_string(&path).map_err(|e| {
            AppError::InvalidData(format!("cannot read addresses file {}: {}", path.display(), e))
        })?;

        Ok(contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn command_with_file(path: PathBuf) -> AnalyseCommand {
        AnalyseCommand {
            addresses: Vec::new(),
            addresses_file: Some(path),
            output_dir: None,
            limit: None,
            api_code: None,
            base_url: None,
            skip_connectivity_check: true,
        }
    }

    #[test]
    fn test_resolve_addresses_prefers_arguments() {
        let cmd = AnalyseCommand {
            addresses: vec!["1A".to_string(), "1B".to_string()],
            addresses_file: Some(PathBuf::from("/does/not/exist")),
            output_dir: None,
            limit: None,
            api_code: None,
            base_url: None,
            skip_connectivity_check: true,
        };
        let config = AppConfig::get_defaults().unwrap();

        let addresses = cmd.resolve_addresses(&config).unwrap();
        assert_eq!(addresses, vec!["1A", "1B"]);
    }

    #[test]
    fn test_resolve_addresses_from_file_skips_blanks_and_comments() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("addresses.txt");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "1KFHE7w8BhaENAswwryaoccDb6qcT6DbYY").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "# comment").unwrap();
        writeln!(file, "  1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa  ").unwrap();

        let cmd = command_with_file(path);
        let config = AppConfig::get_defaults().unwrap();

        let addresses = cmd.resolve_addresses(&config).unwrap();
        assert_eq!(
            addresses,
            vec![
                "1KFHE7w8BhaENAswwryaoccDb6qcT6DbYY",
                "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa"
            ]
        );
    }

    #[test]
    fn test_resolve_addresses_missing_file() {
        let cmd = command_with_file(PathBuf::from("/does/not/exist/addresses.txt"));
        let config = AppConfig::get_defaults().unwrap();

        assert!(cmd.resolve_addresses(&config).is_err());
    }
}
