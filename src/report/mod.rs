//! Report rendering: the result table as a three-part CSV workbook
//!
//! Mirrors the structure of the original spreadsheet report: a summary
//! with run totals and an address overview, the full 42-column detailed
//! table, and a parameter guide describing all 39 metrics. Zero-row
//! result tables render as header-only files, never as an error.

pub mod detail;
pub mod guide;
pub mod summary;

use crate::errors::AppResult;
use crate::types::AddressReport;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Paths of the written report parts
#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub summary: PathBuf,
    pub detailed: PathBuf,
    pub guide: PathBuf,
}

/// Write the full report into `dir`, creating it if needed.
pub fn write_report(reports: &[AddressReport], dir: &Path) -> AppResult<ReportPaths> {
    fs::create_dir_all(dir)?;

    let paths = ReportPaths {
        summary: dir.join("summary.csv"),
        detailed: dir.join("detailed_analysis.csv"),
        guide: dir.join("parameter_guide.csv"),
    };

    summary::write_summary(reports, &paths.summary)?;
    detail::write_detailed(reports, &paths.detailed)?;
    guide::write_guide(&paths.guide)?;

    info!(
        "Report written: {} addresses, 3 parts in {}",
        reports.len(),
        dir.display()
    );
    Ok(paths)
}

/// Print the end-of-run totals to the console.
pub fn print_console_summary(reports: &[AddressReport]) {
    let totals = summary::RunTotals::from_reports(reports);

    println!("\nSummary:");
    println!("  Addresses analysed: {}", totals.addresses);
    println!("  Total balance: {:.8} BTC", totals.balance_btc);
    println!("  Total received: {:.8} BTC", totals.received_btc);
    println!("  Total sent: {:.8} BTC", totals.sent_btc);
    println!("  Total input transactions: {}", totals.in_txs);
    println!("  Total output transactions: {}", totals.out_txs);
    println!(
        "  Total transactions analysed: {}",
        totals.in_txs + totals.out_txs
    );
}
