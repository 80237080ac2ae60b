//! Transaction classification and statistical aggregation engine
//!
//! Two purely functional stages over already-fetched data: [`classify`]
//! splits an address's transaction list into sending and receiving
//! subsets, and the aggregators in [`aggregate`] fold each subset into a
//! fixed-shape metrics record. [`pipeline`] ties both to the fetch and
//! rendering collaborators.

pub mod aggregate;
pub mod classify;
pub mod pipeline;

pub use aggregate::{aggregate_receiving, aggregate_sending};
pub use classify::classify;
pub use pipeline::{analyse_addresses, build_report};
