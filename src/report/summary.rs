//! Summary part: run totals and a per-address overview table

use crate::errors::AppResult;
use crate::types::AddressReport;
use crate::utils::currency::format_btc;
use chrono::Local;
use std::path::Path;

/// Totals over the whole result table
#[derive(Debug, Clone, Default)]
pub struct RunTotals {
    pub addresses: usize,
    pub balance_btc: f64,
    pub received_btc: f64,
    pub sent_btc: f64,
    pub in_txs: usize,
    pub out_txs: usize,
}

impl RunTotals {
    pub fn from_reports(reports: &[AddressReport]) -> Self {
        let mut totals = Self {
            addresses: reports.len(),
            ..Default::default()
        };
        for report in reports {
            totals.balance_btc += report.balance_btc;
            totals.received_btc += report.total_received_btc;
            totals.sent_btc += report.total_sent_btc;
            totals.in_txs += report.sending.tx_count;
            totals.out_txs += report.receiving.tx_count;
        }
        totals
    }
}

/// Write the summary CSV: a key/value totals block followed by one
/// overview row per address.
pub fn write_summary(reports: &[AddressReport], path: &Path) -> AppResult<()> {
    let mut writer = csv::WriterBuilder::new().flexible(true).from_path(path)?;
    let totals = RunTotals::from_reports(reports);

    writer.write_record(["Bitcoin Address Analysis Summary Report"])?;
    let generated = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    writer.write_record(["Generated on", generated.as_str()])?;
    writer.write_record([""])?;

    let totals_rows = [
        ("Total Addresses Analyzed", totals.addresses.to_string()),
        ("Total Current Balance (BTC)", format_btc(totals.balance_btc)),
        ("Total Received (BTC)", format_btc(totals.received_btc)),
        ("Total Sent (BTC)", format_btc(totals.sent_btc)),
        ("Total Input Transactions", totals.in_txs.to_string()),
        ("Total Output Transactions", totals.out_txs.to_string()),
        (
            "Total Transactions Analyzed",
            (totals.in_txs + totals.out_txs).to_string(),
        ),
    ];
    for (label, value) in &totals_rows {
        writer.write_record([*label, value.as_str()])?;
    }
    writer.write_record([""])?;

    writer.write_record([
        "Bitcoin Address",
        "Balance (BTC)",
        "Total Received (BTC)",
        "Total Sent (BTC)",
        "Input TXs",
        "Output TXs",
    ])?;
    for report in reports {
        writer.write_record([
            report.address.clone(),
            format_btc(report.balance_btc),
            format_btc(report.total_received_btc),
            format_btc(report.total_sent_btc),
            report.sending.tx_count.to_string(),
            report.receiving.tx_count.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ReceivingMetrics, SendingMetrics};

    fn report(address: &str, balance: f64, in_txs: usize, out_txs: usize) -> AddressReport {
        AddressReport {
            address: address.to_string(),
            balance_btc: balance,
            total_received_btc: balance * 2.0,
            total_sent_btc: balance,
            sending: SendingMetrics {
                tx_count: in_txs,
                ..Default::default()
            },
            receiving: ReceivingMetrics {
                tx_count: out_txs,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_run_totals() {
        let reports = vec![report("1A", 1.5, 3, 2), report("1B", 0.5, 1, 4)];
        let totals = RunTotals::from_reports(&reports);

        assert_eq!(totals.addresses, 2);
        assert_eq!(totals.balance_btc, 2.0);
        assert_eq!(totals.received_btc, 4.0);
        assert_eq!(totals.sent_btc, 2.0);
        assert_eq!(totals.in_txs, 4);
        assert_eq!(totals.out_txs, 6);
    }

    #[test]
    fn test_run_totals_empty() {
        let totals = RunTotals::from_reports(&[]);
        assert_eq!(totals.addresses, 0);
        assert_eq!(totals.in_txs, 0);
        assert_eq!(totals.balance_btc, 0.0);
    }
}
