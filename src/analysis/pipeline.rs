//! Per-address orchestration
//!
//! Addresses are processed strictly one at a time, in input order. A
//! failed fetch (or any per-address error surfaced by the source) is
//! logged and skips that address without aborting the rest of the run.

use crate::analysis::{aggregate_receiving, aggregate_sending, classify};
use crate::api::AddressSource;
use crate::types::{AddressHistory, AddressReport};
use crate::utils::currency::sats_to_btc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

/// Build one report record from an already-fetched address history.
///
/// Pure over in-memory data: classify, aggregate both sides, merge with
/// the address-level balance fields.
pub fn build_report(address: &str, history: &AddressHistory) -> AddressReport {
    let (sending, receiving) = classify(&history.txs, address);
    info!(
        "{}: {} sending, {} receiving transactions (of {})",
        address,
        sending.len(),
        receiving.len(),
        history.txs.len()
    );

    AddressReport {
        address: address.to_string(),
        balance_btc: sats_to_btc(history.final_balance),
        total_received_btc: sats_to_btc(history.total_received),
        total_sent_btc: sats_to_btc(history.total_sent),
        sending: aggregate_sending(&sending, address),
        receiving: aggregate_receiving(&receiving, address),
    }
}

/// Analyse a list of addresses sequentially against `source`.
///
/// `inter_address_delay` is slept between consecutive addresses to stay
/// under the explorer's rate limits. The result table preserves input
/// order; skipped addresses contribute no record.
pub async fn analyse_addresses<S: AddressSource>(
    source: &S,
    addresses: &[String],
    inter_address_delay: Duration,
) -> Vec<AddressReport> {
    let mut reports = Vec::with_capacity(addresses.len());

    for (i, address) in addresses.iter().enumerate() {
        info!("Analysing address {}/{}: {}", i + 1, addresses.len(), address);

        if i > 0 && !inter_address_delay.is_zero() {
            sleep(inter_address_delay).await;
        }

        match source.fetch_address(address).await {
            Ok(history) => reports.push(build_report(address, &history)),
            Err(e) => warn!("Skipping {}: {}", address, e),
        }
    }

    info!(
        "Analysis completed for {}/{} addresses",
        reports.len(),
        addresses.len()
    );
    reports
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PrevOut, Transaction, TxInput, TxOutput};

    #[test]
    fn test_build_report_merges_balances_and_metrics() {
        let history = AddressHistory {
            address: "A".to_string(),
            final_balance: 150_000_000,
            total_received: 500_000_000,
            total_sent: 350_000_000,
            n_tx: 1,
            txs: vec![Transaction {
                inputs: vec![TxInput {
                    prev_out: Some(PrevOut {
                        addr: Some("A".to_string()),
                        value: 0,
                    }),
                }],
                outputs: vec![TxOutput {
                    addr: Some("B".to_string()),
                    value: 50_000_000,
                }],
                ..Default::default()
            }],
        };

        let report = build_report("A", &history);
        assert_eq!(report.address, "A");
        assert_eq!(report.balance_btc, 1.5);
        assert_eq!(report.total_received_btc, 5.0);
        assert_eq!(report.total_sent_btc, 3.5);
        assert_eq!(report.sending.tx_count, 1);
        assert_eq!(report.sending.total_transferred_btc, 0.5);
        assert_eq!(report.receiving.tx_count, 0);
    }

    #[test]
    fn test_build_report_empty_history() {
        let history = AddressHistory {
            address: "A".to_string(),
            final_balance: 0,
            total_received: 0,
            total_sent: 0,
            n_tx: 0,
            txs: vec![],
        };

        let report = build_report("A", &history);
        assert!(report.metric_values().iter().all(|v| *v == 0.0));
    }
}
