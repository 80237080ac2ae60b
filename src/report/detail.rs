//! Detailed part: the full 42-column result table
//!
//! Column order is fixed: the address, the three balance fields, then
//! the 39 metrics in label order. BTC amounts render at satoshi
//! precision, distributional statistics at two decimal places, counts
//! and extrema of counts as plain integers.

use crate::errors::AppResult;
use crate::types::{AddressReport, MetricCategory, MetricInfo, METRIC_GUIDE};
use crate::utils::currency::format_btc;
use std::path::Path;

/// Leading non-metric column headers
pub const ADDRESS_COLUMN: &str = "Bitcoin Address";
pub const BALANCE_COLUMNS: [&str; 3] = [
    "Current Balance (BTC)",
    "Total Received (BTC)",
    "Total Sent (BTC)",
];

/// Header row: 42 columns in stable order
pub fn header() -> Vec<&'static str> {
    let mut columns = vec![ADDRESS_COLUMN];
    columns.extend(BALANCE_COLUMNS);
    columns.extend(METRIC_GUIDE.iter().map(|info| info.label));
    columns
}

/// Format one metric value according to its category.
fn format_metric(value: f64, info: &MetricInfo) -> String {
    if info.is_currency() {
        format_btc(value)
    } else if matches!(
        info.category,
        MetricCategory::Average | MetricCategory::Statistics
    ) {
        format!("{:.2}", value)
    } else {
        format!("{}", value as u64)
    }
}

/// One detailed row for an address report
pub fn detailed_row(report: &AddressReport) -> Vec<String> {
    let mut row = Vec::with_capacity(42);
    row.push(report.address.clone());
    row.push(format_btc(report.balance_btc));
    row.push(format_btc(report.total_received_btc));
    row.push(format_btc(report.total_sent_btc));
    for (value, info) in report.metric_values().iter().zip(METRIC_GUIDE.iter()) {
        row.push(format_metric(*value, info));
    }
    row
}

/// Write the detailed analysis CSV, one row per address.
pub fn write_detailed(reports: &[AddressReport], path: &Path) -> AppResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(header())?;
    for report in reports {
        writer.write_record(detailed_row(report))?;
    }
    writer.flush()?;
    Ok(())
}
