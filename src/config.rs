use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Application configuration loaded from config.toml or environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub explorer: ExplorerConfig,
    pub output: OutputConfig,
    pub paths: PathsConfig,
}

/// Blockchain.info explorer API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorerConfig {
    pub base_url: String,
    pub api_code: String,
    pub tx_limit: usize,
    pub timeout_seconds: u64,
    pub max_retries: usize,
    pub base_delay_ms: u64,
    pub inter_address_delay_ms: u64,
    pub max_retry_delay_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub report_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    pub addresses_file: PathBuf,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            base_url: "https://blockchain.info".to_string(),
            api_code: String::new(),
            tx_limit: 1000,
            timeout_seconds: 30,
            max_retries: 10,
            base_delay_ms: 1000,
            inter_address_delay_ms: 3000,
            max_retry_delay_seconds: 30,
        }
    }
}

impl AppConfig {
    /// Load configuration from config.toml file and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = ExplorerConfig::default();
        let config = Config::builder()
            // Start with default values
            .set_default("explorer.base_url", defaults.base_url)?
            .set_default("explorer.api_code", defaults.api_code)?
            .set_default("explorer.tx_limit", defaults.tx_limit as i64)?
            .set_default("explorer.timeout_seconds", defaults.timeout_seconds)?
            .set_default("explorer.max_retries", defaults.max_retries as i64)?
            .set_default("explorer.base_delay_ms", defaults.base_delay_ms)?
            .set_default(
                "explorer.inter_address_delay_ms",
                defaults.inter_address_delay_ms,
            )?
            .set_default(
                "explorer.max_retry_delay_seconds",
                defaults.max_retry_delay_seconds,
            )?
            .set_default("output.report_dir", "./output/report")?
            .set_default("paths.addresses_file", "./addresses.txt")?
            // Load from config.toml if it exists
            .add_source(File::with_name("config").required(false))
            // EXPLORER_* env variables can override API settings
            .add_source(config::Environment::with_prefix("EXPLORER"))
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;

        // Check for specific environment variables with custom names
        if let Ok(api_code) = env::var("EXPLORER_API_CODE") {
            app_config.explorer.api_code = api_code;
        }

        if let Ok(addresses_file) = env::var("ADDRESSES_FILE") {
            app_config.paths.addresses_file = PathBuf::from(addresses_file);
        }

        if let Ok(report_dir) = env::var("REPORT_DIR") {
            app_config.output.report_dir = PathBuf::from(report_dir);
        }

        Ok(app_config)
    }

    /// Get default config values for CLI argument defaults
    pub fn get_defaults() -> Result<Self, ConfigError> {
        // Try to load config for defaults, but don't fail if not found
        match Self::load() {
            Ok(config) => Ok(config),
            Err(_) => Ok(Self {
                explorer: ExplorerConfig::default(),
                output: OutputConfig {
                    report_dir: PathBuf::from("./output/report"),
                },
                paths: PathsConfig {
                    addresses_file: PathBuf::from("./addresses.txt"),
                },
            }),
        }
    }
}
