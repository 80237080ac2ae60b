//! Fixed-shape metrics records for the 39 per-address statistics
//!
//! The rendering layer depends on the stable label strings and on the
//! category mapping in [`METRIC_GUIDE`]; both must stay in step with the
//! field order of [`SendingMetrics`] and [`ReceivingMetrics`].

use serde::Serialize;

/// Metrics over the sending-set: transactions where the address funds
/// at least one input (metrics 1-20)
///
/// All-zero via `Default` when the sending-set is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SendingMetrics {
    pub tx_count: usize,
    pub total_recipients: usize,
    pub unique_recipients: usize,
    pub avg_recipients_per_tx: f64,
    pub max_recipients_in_tx: usize,
    pub min_recipients_in_tx: usize,
    pub recipients_std_dev: f64,
    /// Intentionally equal to `unique_senders`; both keys are kept because
    /// downstream consumers expect both columns present.
    pub total_senders: usize,
    pub unique_senders: usize,
    pub avg_senders_per_tx: f64,
    pub max_senders_in_tx: usize,
    pub min_senders_in_tx: usize,
    pub senders_std_dev: f64,
    pub total_transferred_btc: f64,
    pub avg_transferred_btc: f64,
    pub min_transferred_btc: f64,
    pub max_transferred_btc: f64,
    pub transferred_std_dev: f64,
    pub avg_btc_per_recipient: f64,
    pub avg_btc_per_unique_recipient: f64,
}

/// Metrics over the receiving-set: transactions paying the address
/// (metrics 21-39)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReceivingMetrics {
    pub tx_count: usize,
    /// Intentionally equal to `unique_senders`, same note as the
    /// sending-side pair.
    pub total_senders: usize,
    pub unique_senders: usize,
    pub avg_senders_per_tx: f64,
    pub max_senders_in_tx: usize,
    pub min_senders_in_tx: usize,
    pub senders_std_dev: f64,
    pub total_receivers: usize,
    pub unique_receivers: usize,
    pub avg_receivers_per_tx: f64,
    pub max_receivers_in_tx: usize,
    pub min_receivers_in_tx: usize,
    pub receivers_std_dev: f64,
    pub total_received_btc: f64,
    pub avg_received_btc: f64,
    pub min_received_btc: f64,
    pub max_received_btc: f64,
    pub received_std_dev: f64,
    pub avg_btc_per_sender: f64,
}

impl SendingMetrics {
    /// Metric values 1-20 in label order
    pub fn values(&self) -> [f64; 20] {
        [
            self.tx_count as f64,
            self.total_recipients as f64,
            self.unique_recipients as f64,
            self.avg_recipients_per_tx,
            self.max_recipients_in_tx as f64,
            self.min_recipients_in_tx as f64,
            self.recipients_std_dev,
            self.total_senders as f64,
            self.unique_senders as f64,
            self.avg_senders_per_tx,
            self.max_senders_in_tx as f64,
            self.min_senders_in_tx as f64,
            self.senders_std_dev,
            self.total_transferred_btc,
            self.avg_transferred_btc,
            self.min_transferred_btc,
            self.max_transferred_btc,
            self.transferred_std_dev,
            self.avg_btc_per_recipient,
            self.avg_btc_per_unique_recipient,
        ]
    }
}

impl ReceivingMetrics {
    /// Metric values 21-39 in label order
    pub fn values(&self) -> [f64; 19] {
        [
            self.tx_count as f64,
            self.total_senders as f64,
            self.unique_senders as f64,
            self.avg_senders_per_tx,
            self.max_senders_in_tx as f64,
            self.min_senders_in_tx as f64,
            self.senders_std_dev,
            self.total_receivers as f64,
            self.unique_receivers as f64,
            self.avg_receivers_per_tx,
            self.max_receivers_in_tx as f64,
            self.min_receivers_in_tx as f64,
            self.receivers_std_dev,
            self.total_received_btc,
            self.avg_received_btc,
            self.min_received_btc,
            self.max_received_btc,
            self.received_std_dev,
            self.avg_btc_per_sender,
        ]
    }
}

/// One fully processed address: balance fields plus both metric blocks
#[derive(Debug, Clone, Serialize)]
pub struct AddressReport {
    pub address: String,
    pub balance_btc: f64,
    pub total_received_btc: f64,
    pub total_sent_btc: f64,
    pub sending: SendingMetrics,
    pub receiving: ReceivingMetrics,
}

impl AddressReport {
    /// All 39 metric values in label order (1-39)
    pub fn metric_values(&self) -> [f64; 39] {
        let mut values = [0.0; 39];
        values[..20].copy_from_slice(&self.sending.values());
        values[20..].copy_from_slice(&self.receiving.values());
        values
    }
}

/// Broad category of a metric, used by the rendering layer for formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricCategory {
    Count,
    Average,
    Maximum,
    Minimum,
    Statistics,
    BtcAmount,
}

impl MetricCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricCategory::Count => "Count",
            MetricCategory::Average => "Average",
            MetricCategory::Maximum => "Maximum",
            MetricCategory::Minimum => "Minimum",
            MetricCategory::Statistics => "Statistics",
            MetricCategory::BtcAmount => "BTC Amount",
        }
    }
}

/// Static description of one of the 39 metrics
#[derive(Debug, Clone, Copy)]
pub struct MetricInfo {
    pub number: u8,
    pub label: &'static str,
    pub description: &'static str,
    pub category: MetricCategory,
}

impl MetricInfo {
    /// Whether the metric is a BTC amount and should be rendered at
    /// satoshi precision (8 decimal places). Covers the std-dev metrics
    /// over coin amounts as well, which are categorised as Statistics.
    pub fn is_currency(&self) -> bool {
        self.category == MetricCategory::BtcAmount || self.label.contains("coins")
    }
}

/// The 39 metric definitions in stable output order
pub const METRIC_GUIDE: [MetricInfo; 39] = [
    MetricInfo {
        number: 1,
        label: "1. No. of in. transactions",
        description: "Total number of transactions where this address sends coins to others",
        category: MetricCategory::Count,
    },
    MetricInfo {
        number: 2,
        label: "2. Total recipient addresses (excluding self as change)",
        description: "Total count of addresses that received coins (change to self excluded)",
        category: MetricCategory::Count,
    },
    MetricInfo {
        number: 3,
        label: "3. Number of unique recipient addresses",
        description: "Count of unique addresses that received coins from this address",
        category: MetricCategory::Count,
    },
    MetricInfo {
        number: 4,
        label: "4. Average number of recipients per transaction",
        description: "Average number of recipients per input transaction",
        category: MetricCategory::Average,
    },
    MetricInfo {
        number: 5,
        label: "5. Max number of recipients in a transaction",
        description: "Maximum recipients in any single input transaction",
        category: MetricCategory::Maximum,
    },
    MetricInfo {
        number: 6,
        label: "6. Min number of recipients in a transaction",
        description: "Minimum recipients in any single input transaction",
        category: MetricCategory::Minimum,
    },
    MetricInfo {
        number: 7,
        label: "7. Standard deviation of recipients counts",
        description: "Statistical variation in number of recipients per transaction",
        category: MetricCategory::Statistics,
    },
    MetricInfo {
        number: 8,
        label: "8. Total sender addresses in in. transactions",
        description: "Total count of all sender addresses in input transactions",
        category: MetricCategory::Count,
    },
    MetricInfo {
        number: 9,
        label: "9. Number of unique senders addresses",
        description: "Count of unique sender addresses in input transactions",
        category: MetricCategory::Count,
    },
    MetricInfo {
        number: 10,
        label: "10. Average number of senders per transaction",
        description: "Average number of senders per input transaction",
        category: MetricCategory::Average,
    },
    MetricInfo {
        number: 11,
        label: "11. Max number of senders in a transaction",
        description: "Maximum senders in any single input transaction",
        category: MetricCategory::Maximum,
    },
    MetricInfo {
        number: 12,
        label: "12. Min number of senders in a transaction",
        description: "Minimum senders in any single input transaction",
        category: MetricCategory::Minimum,
    },
    MetricInfo {
        number: 13,
        label: "13. Standard deviation of sender counts",
        description: "Statistical variation in number of senders per transaction",
        category: MetricCategory::Statistics,
    },
    MetricInfo {
        number: 14,
        label: "14. Total coins transferred (excluding change)",
        description: "Total BTC amount sent to others (change to self excluded)",
        category: MetricCategory::BtcAmount,
    },
    MetricInfo {
        number: 15,
        label: "15. Average coins transferred per transaction",
        description: "Average BTC amount sent per input transaction",
        category: MetricCategory::BtcAmount,
    },
    MetricInfo {
        number: 16,
        label: "16. Min coins transferred in one transaction",
        description: "Minimum BTC amount sent in any single transaction",
        category: MetricCategory::BtcAmount,
    },
    MetricInfo {
        number: 17,
        label: "17. Max coins transferred in one transaction",
        description: "Maximum BTC amount sent in any single transaction",
        category: MetricCategory::BtcAmount,
    },
    MetricInfo {
        number: 18,
        label: "18. Standard deviation of coins transferred in all transaction",
        description: "Statistical variation in BTC amounts sent per transaction",
        category: MetricCategory::Statistics,
    },
    MetricInfo {
        number: 19,
        label: "19. Avg. coins transferred per receiver",
        description: "Average BTC amount per recipient address",
        category: MetricCategory::BtcAmount,
    },
    MetricInfo {
        number: 20,
        label: "20. Avg. coins transferred per unique receiver",
        description: "Average BTC amount per unique recipient address",
        category: MetricCategory::BtcAmount,
    },
    MetricInfo {
        number: 21,
        label: "21. Number of out. transactions",
        description: "Total number of transactions where this address receives coins",
        category: MetricCategory::Count,
    },
    MetricInfo {
        number: 22,
        label: "22. Total senders addresses (excluding self as change)",
        description: "Total count of addresses that sent coins (self excluded)",
        category: MetricCategory::Count,
    },
    MetricInfo {
        number: 23,
        label: "23. Number of unique sender addresses",
        description: "Count of unique addresses that sent coins to this address",
        category: MetricCategory::Count,
    },
    MetricInfo {
        number: 24,
        label: "24. Average number of senders per transaction",
        description: "Average number of senders per output transaction",
        category: MetricCategory::Average,
    },
    MetricInfo {
        number: 25,
        label: "25. Max number of senders in a transaction",
        description: "Maximum senders in any single output transaction",
        category: MetricCategory::Maximum,
    },
    MetricInfo {
        number: 26,
        label: "26. Min number of senders in a transaction",
        description: "Minimum senders in any single output transaction",
        category: MetricCategory::Minimum,
    },
    MetricInfo {
        number: 27,
        label: "27. Variation (std. dev.) in senders count",
        description: "Standard deviation of senders per output transaction",
        category: MetricCategory::Statistics,
    },
    MetricInfo {
        number: 28,
        label: "28. Total receivers addresses in out. transactions",
        description: "Total count of all receiver addresses in output transactions",
        category: MetricCategory::Count,
    },
    MetricInfo {
        number: 29,
        label: "29. Number of unique receivers addresses",
        description: "Count of unique receiver addresses in output transactions",
        category: MetricCategory::Count,
    },
    MetricInfo {
        number: 30,
        label: "30. Average number of receivers per transaction",
        description: "Average number of receivers per output transaction",
        category: MetricCategory::Average,
    },
    MetricInfo {
        number: 31,
        label: "31. Max number of receivers in a transaction",
        description: "Maximum receivers in any single output transaction",
        category: MetricCategory::Maximum,
    },
    MetricInfo {
        number: 32,
        label: "32. Min number of receivers in a transaction",
        description: "Minimum receivers in any single output transaction",
        category: MetricCategory::Minimum,
    },
    MetricInfo {
        number: 33,
        label: "33. Variation in receivers count",
        description: "Standard deviation of receivers per output transaction",
        category: MetricCategory::Statistics,
    },
    MetricInfo {
        number: 34,
        label: "34. Total coins received (excluding change)",
        description: "Total BTC amount received from others (change excluded)",
        category: MetricCategory::BtcAmount,
    },
    MetricInfo {
        number: 35,
        label: "35. Average coins received per transaction",
        description: "Average BTC amount received per output transaction",
        category: MetricCategory::BtcAmount,
    },
    MetricInfo {
        number: 36,
        label: "36. Min coins received in one transaction",
        description: "Minimum BTC amount received in any single transaction",
        category: MetricCategory::BtcAmount,
    },
    MetricInfo {
        number: 37,
        label: "37. Max coins received in one transaction",
        description: "Maximum BTC amount received in any single transaction",
        category: MetricCategory::BtcAmount,
    },
    MetricInfo {
        number: 38,
        label: "38. Variation (i.e., S.D) in coins received in all transaction",
        description: "Standard deviation of BTC amounts received per transaction",
        category: MetricCategory::Statistics,
    },
    MetricInfo {
        number: 39,
        label: "39. Avg. coins per sender",
        description: "Average BTC amount received per sender address",
        category: MetricCategory::BtcAmount,
    },
];
