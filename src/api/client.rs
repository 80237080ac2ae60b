//! Blockchain.info explorer client
//!
//! Fetches address histories from the public `rawaddr` endpoint with
//! request pacing and retry on rate limiting. The explorer enforces a
//! minimum delay between requests; the base delay is slept before every
//! attempt, and HTTP 429 responses grow the delay linearly.

use crate::api::{retry_delay, AddressSource};
use crate::config::ExplorerConfig;
use crate::errors::{ApiError, ApiResult};
use crate::types::AddressHistory;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

/// Genesis-block coinbase address, used for connectivity probes
const PROBE_ADDRESS: &str = "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa";

/// Async HTTP client for the Blockchain.info explorer API
pub struct ExplorerClient {
    http: reqwest::Client,
    config: ExplorerConfig,
}

impl ExplorerClient {
    pub fn new(config: ExplorerConfig) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self { http, config })
    }

    /// Endpoint URL for one address's history
    fn rawaddr_url(&self, address: &str) -> String {
        format!(
            "{}/rawaddr/{}",
            self.config.base_url.trim_end_matches('/'),
            address
        )
    }

    /// Single request against the rawaddr endpoint, no retries
    async fn get_rawaddr(&self, address: &str, limit: usize) -> ApiResult<Value> {
        let mut params: Vec<(&str, String)> = vec![("limit", limit.to_string())];
        if !self.config.api_code.is_empty() {
            params.push(("api_code", self.config.api_code.clone()));
        }

        let response = self
            .http
            .get(self.rawaddr_url(address))
            .query(&params)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(response.json::<Value>().await?),
            StatusCode::TOO_MANY_REQUESTS => Err(ApiError::RateLimited),
            status => {
                let body: String = response
                    .text()
                    .await
                    .unwrap_or_default()
                    .chars()
                    .take(200)
                    .collect();
                Err(ApiError::HttpStatus {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }

    /// Fetch the raw `rawaddr` JSON for one address (single attempt)
    pub async fn fetch_address_raw(&self, address: &str) -> ApiResult<Value> {
        sleep(Duration::from_millis(self.config.base_delay_ms)).await;
        self.get_rawaddr(address, self.config.tx_limit).await
    }

    /// Fetch and parse one address's history, retrying on rate limits
    /// and transient failures up to the configured maximum.
    ///
    /// A malformed 200 response is not retried: the payload will not
    /// change on a second request.
    pub async fn fetch_address_history(&self, address: &str) -> ApiResult<AddressHistory> {
        let base_delay = Duration::from_millis(self.config.base_delay_ms);

        for attempt in 0..self.config.max_retries {
            if attempt == 0 {
                sleep(base_delay).await;
            } else {
                let delay = retry_delay(base_delay, attempt, self.config.max_retry_delay_seconds);
                warn!(
                    "Retry {}/{} for {} after {:.1}s",
                    attempt,
                    self.config.max_retries,
                    address,
                    delay.as_secs_f64()
                );
                sleep(delay).await;
            }

            match self.get_rawaddr(address, self.config.tx_limit).await {
                Ok(value) => {
                    let history: AddressHistory = serde_json::from_value(value)
                        .map_err(|e| ApiError::DeserialisationFailed(e.to_string()))?;
                    info!(
                        "Retrieved {} transactions for {} (balance: {} sats)",
                        history.txs.len(),
                        address,
                        history.final_balance
                    );
                    return Ok(history);
                }
                Err(ApiError::RateLimited) => {
                    warn!(
                        "Rate limit hit fetching {} (attempt {}/{})",
                        address,
                        attempt + 1,
                        self.config.max_retries
                    );
                }
                Err(e @ ApiError::DeserialisationFailed(_)) => return Err(e),
                Err(e) => {
                    warn!("Fetch attempt {} failed for {}: {}", attempt + 1, address, e);
                }
            }
        }

        Err(ApiError::MaxRetriesExceeded {
            address: address.to_string(),
        })
    }

    /// Probe the explorer with a known address and a single-transaction
    /// limit to validate connectivity.
    pub async fn test_connectivity(&self) -> ApiResult<()> {
        self.get_rawaddr(PROBE_ADDRESS, 1).await.map(|_| ())
    }
}

impl AddressSource for ExplorerClient {
    async fn fetch_address(&self, address: &str) -> ApiResult<AddressHistory> {
        self.fetch_address_history(address).await
    }
}
