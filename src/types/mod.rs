//! Core data model: explorer wire types and per-address metrics records

pub mod metrics;
pub mod transaction;

pub use metrics::{
    AddressReport, MetricCategory, MetricInfo, ReceivingMetrics, SendingMetrics, METRIC_GUIDE,
};
pub use transaction::{AddressHistory, PrevOut, Transaction, TxInput, TxOutput};
