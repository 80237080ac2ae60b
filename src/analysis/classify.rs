//! Transaction classifier
//!
//! Splits a transaction list into two subsets relative to one address:
//! the sending-set (the address funds at least one input) and the
//! receiving-set (at least one output pays the address). The tests are
//! independent, so a transaction paying out with change back to the
//! sender lands in both sets.

use crate::types::Transaction;

/// Partition `transactions` into (sending-set, receiving-set) for `target`.
///
/// Membership is decided by exact string equality against the raw
/// input/output address fields; absent fields never match. Order within
/// each subset follows the input order, and no transaction is copied.
pub fn classify<'a>(
    transactions: &'a [Transaction],
    target: &str,
) -> (Vec<&'a Transaction>, Vec<&'a Transaction>) {
    let mut sending = Vec::new();
    let mut receiving = Vec::new();

    for tx in transactions {
        if tx.spends_from(target) {
            sending.push(tx);
        }
        if tx.pays_to(target) {
            receiving.push(tx);
        }
    }

    (sending, receiving)
}
