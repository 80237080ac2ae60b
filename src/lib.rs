//! Bitcoin Address Analyser
//!
//! Fetches per-address transaction histories from the Blockchain.info
//! explorer API, classifies each transaction as sending or receiving
//! relative to the target address, and folds both sets into 39
//! per-address statistics rendered as a three-part CSV report.

pub mod analysis;
pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod report;
pub mod types;
pub mod utils;
