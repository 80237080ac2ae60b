//! Statistical aggregators for the sending and receiving subsets
//!
//! Each aggregator folds its subset into a fixed-shape record in a
//! single pass: per-transaction counterparty counts and coin amounts
//! feed the distributional statistics, while running sets track the
//! global unique-address cardinalities. An empty subset short-circuits
//! to the all-zero record.

use crate::types::{ReceivingMetrics, SendingMetrics, Transaction};
use crate::utils::currency::sats_to_btc;
use crate::utils::math::{max_of, mean, min_of, population_std_dev, safe_div};
use std::collections::HashSet;

/// Compute metrics 1-20 over the sending-set of `target`.
///
/// Recipients exclude `target` itself: change outputs count neither
/// towards recipient cardinality nor towards the transferred volume.
/// Outputs with no decoded address are excluded from recipient counts
/// but their value still leaves the address, so it counts as
/// transferred. Senders are taken as-is from the inputs, including
/// `target`.
pub fn aggregate_sending(sending: &[&Transaction], target: &str) -> SendingMetrics {
    if sending.is_empty() {
        return SendingMetrics::default();
    }

    let mut recipient_counts = Vec::with_capacity(sending.len());
    let mut sender_counts = Vec::with_capacity(sending.len());
    let mut transferred_btc = Vec::with_capacity(sending.len());
    let mut total_recipients = 0usize;
    let mut unique_recipients: HashSet<&str> = HashSet::new();
    let mut unique_senders: HashSet<&str> = HashSet::new();

    for tx in sending {
        let mut senders_in_tx = 0usize;
        for input in &tx.inputs {
            if let Some(addr) = input.source_address() {
                unique_senders.insert(addr);
                senders_in_tx += 1;
            }
        }
        sender_counts.push(senders_in_tx as f64);

        let mut recipients_in_tx = 0usize;
        let mut sent_sats = 0u64;
        for output in &tx.outputs {
            match output.addr.as_deref() {
                Some(addr) if addr != target => {
                    unique_recipients.insert(addr);
                    recipients_in_tx += 1;
                    total_recipients += 1;
                    sent_sats += output.value;
                }
                // Change back to the target: not a recipient, not volume
                Some(_) => {}
                // Address-less outputs still move coins away
                None => sent_sats += output.value,
            }
        }
        recipient_counts.push(recipients_in_tx as f64);
        transferred_btc.push(sats_to_btc(sent_sats));
    }

    let total_transferred: f64 = transferred_btc.iter().sum();

    SendingMetrics {
        tx_count: sending.len(),
        total_recipients,
        unique_recipients: unique_recipients.len(),
        avg_recipients_per_tx: mean(&recipient_counts),
        max_recipients_in_tx: max_of(&recipient_counts) as usize,
        min_recipients_in_tx: min_of(&recipient_counts) as usize,
        recipients_std_dev: population_std_dev(&recipient_counts),
        // Both sender totals come from the same unique set; downstream
        // consumers expect both keys with matching values.
        total_senders: unique_senders.len(),
        unique_senders: unique_senders.len(),
        avg_senders_per_tx: mean(&sender_counts),
        max_senders_in_tx: max_of(&sender_counts) as usize,
        min_senders_in_tx: min_of(&sender_counts) as usize,
        senders_std_dev: population_std_dev(&sender_counts),
        total_transferred_btc: total_transferred,
        avg_transferred_btc: mean(&transferred_btc),
        min_transferred_btc: min_of(&transferred_btc),
        max_transferred_btc: max_of(&transferred_btc),
        transferred_std_dev: population_std_dev(&transferred_btc),
        avg_btc_per_recipient: safe_div(total_transferred, total_recipients as f64),
        avg_btc_per_unique_recipient: safe_div(total_transferred, unique_recipients.len() as f64),
    }
}

/// Compute metrics 21-39 over the receiving-set of `target`.
///
/// Roles reverse relative to the sending side: senders exclude `target`
/// (self-change inputs), receivers include every output with a decoded
/// address (`target` is expected among them), and the received amount
/// is the sum of outputs paying `target`.
pub fn aggregate_receiving(receiving: &[&Transaction], target: &str) -> ReceivingMetrics {
    if receiving.is_empty() {
        return ReceivingMetrics::default();
    }

    let mut sender_counts = Vec::with_capacity(receiving.len());
    let mut receiver_counts = Vec::with_capacity(receiving.len());
    let mut received_btc = Vec::with_capacity(receiving.len());
    let mut total_receivers = 0usize;
    let mut unique_senders: HashSet<&str> = HashSet::new();
    let mut unique_receivers: HashSet<&str> = HashSet::new();

    for tx in receiving {
        let mut senders_in_tx = 0usize;
        for input in &tx.inputs {
            if let Some(addr) = input.source_address() {
                if addr != target {
                    unique_senders.insert(addr);
                    senders_in_tx += 1;
                }
            }
        }
        sender_counts.push(senders_in_tx as f64);

        let mut receivers_in_tx = 0usize;
        let mut received_sats = 0u64;
        for output in &tx.outputs {
            if let Some(addr) = output.addr.as_deref() {
                unique_receivers.insert(addr);
                receivers_in_tx += 1;
                total_receivers += 1;
                if addr == target {
                    received_sats += output.value;
                }
            }
        }
        receiver_counts.push(receivers_in_tx as f64);
        received_btc.push(sats_to_btc(received_sats));
    }

    let total_received: f64 = received_btc.iter().sum();

    ReceivingMetrics {
        tx_count: receiving.len(),
        total_senders: unique_senders.len(),
        unique_senders: unique_senders.len(),
        avg_senders_per_tx: mean(&sender_counts),
        max_senders_in_tx: max_of(&sender_counts) as usize,
        min_senders_in_tx: min_of(&sender_counts) as usize,
        senders_std_dev: population_std_dev(&sender_counts),
        total_receivers,
        unique_receivers: unique_receivers.len(),
        avg_receivers_per_tx: mean(&receiver_counts),
        max_receivers_in_tx: max_of(&receiver_counts) as usize,
        min_receivers_in_tx: min_of(&receiver_counts) as usize,
        receivers_std_dev: population_std_dev(&receiver_counts),
        total_received_btc: total_received,
        avg_received_btc: mean(&received_btc),
        min_received_btc: min_of(&received_btc),
        max_received_btc: max_of(&received_btc),
        received_std_dev: population_std_dev(&received_btc),
        avg_btc_per_sender: safe_div(total_received, unique_senders.len() as f64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PrevOut, TxInput, TxOutput};

    fn tx(input_addrs: &[Option<&str>], outputs: &[(Option<&str>, u64)]) -> Transaction {
        Transaction {
            inputs: input_addrs
                .iter()
                .map(|addr| TxInput {
                    prev_out: Some(PrevOut {
                        addr: addr.map(String::from),
                        value: 0,
                    }),
                })
                .collect(),
            outputs: outputs
                .iter()
                .map(|(addr, value)| TxOutput {
                    addr: addr.map(String::from),
                    value: *value,
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_sending_set_is_all_zero() {
        let metrics = aggregate_sending(&[], "A");
        assert_eq!(metrics, SendingMetrics::default());
        assert!(metrics.values().iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_empty_receiving_set_is_all_zero() {
        let metrics = aggregate_receiving(&[], "A");
        assert_eq!(metrics, ReceivingMetrics::default());
        assert!(metrics.values().iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_single_sending_transaction_with_change() {
        // A funds the inputs; one output pays B 0.5 BTC, one returns
        // 0.3 BTC change to A
        let t = tx(
            &[Some("A")],
            &[(Some("B"), 50_000_000), (Some("A"), 30_000_000)],
        );
        let metrics = aggregate_sending(&[&t], "A");

        assert_eq!(metrics.tx_count, 1);
        assert_eq!(metrics.total_recipients, 1);
        assert_eq!(metrics.unique_recipients, 1);
        assert_eq!(metrics.avg_recipients_per_tx, 1.0);
        assert_eq!(metrics.max_recipients_in_tx, 1);
        assert_eq!(metrics.min_recipients_in_tx, 1);
        assert_eq!(metrics.recipients_std_dev, 0.0);
        assert_eq!(metrics.total_senders, 1);
        assert_eq!(metrics.unique_senders, 1);
        assert_eq!(metrics.total_transferred_btc, 0.5);
        assert_eq!(metrics.avg_transferred_btc, 0.5);
        assert_eq!(metrics.min_transferred_btc, 0.5);
        assert_eq!(metrics.max_transferred_btc, 0.5);
        assert_eq!(metrics.transferred_std_dev, 0.0);
        assert_eq!(metrics.avg_btc_per_recipient, 0.5);
        assert_eq!(metrics.avg_btc_per_unique_recipient, 0.5);
    }

    #[test]
    fn test_occurrence_vs_unique_weighted_averages() {
        // Recipients across the set: [X, X, Y]; 3.0 BTC transferred in
        // total. Per-occurrence average is 1.0, per-unique is 1.5.
        let t1 = tx(&[Some("A")], &[(Some("X"), 100_000_000)]);
        let t2 = tx(
            &[Some("A")],
            &[(Some("X"), 100_000_000), (Some("Y"), 100_000_000)],
        );
        let metrics = aggregate_sending(&[&t1, &t2], "A");

        assert_eq!(metrics.total_recipients, 3);
        assert_eq!(metrics.unique_recipients, 2);
        assert_eq!(metrics.total_transferred_btc, 3.0);
        assert_eq!(metrics.avg_btc_per_recipient, 1.0);
        assert_eq!(metrics.avg_btc_per_unique_recipient, 1.5);
    }

    #[test]
    fn test_sender_totals_intentionally_identical() {
        let t1 = tx(&[Some("A"), Some("S1")], &[(Some("B"), 1000)]);
        let t2 = tx(&[Some("S1"), Some("S2")], &[(Some("B"), 1000)]);
        let metrics = aggregate_sending(&[&t1, &t2], "A");

        // A, S1, S2 - both totals come from the same unique set
        assert_eq!(metrics.total_senders, 3);
        assert_eq!(metrics.unique_senders, 3);
        assert_eq!(metrics.avg_senders_per_tx, 2.0);
        assert_eq!(metrics.max_senders_in_tx, 2);
        assert_eq!(metrics.min_senders_in_tx, 2);
        assert_eq!(metrics.senders_std_dev, 0.0);
    }

    #[test]
    fn test_self_transfer_contributes_nothing() {
        // The only non-change entry is a 0-value output back to A
        let t = tx(&[Some("A")], &[(Some("A"), 0)]);
        let metrics = aggregate_sending(&[&t], "A");

        assert_eq!(metrics.tx_count, 1);
        assert_eq!(metrics.total_recipients, 0);
        assert_eq!(metrics.unique_recipients, 0);
        assert_eq!(metrics.total_transferred_btc, 0.0);
        assert_eq!(metrics.avg_btc_per_recipient, 0.0);
        assert_eq!(metrics.avg_btc_per_unique_recipient, 0.0);
    }

    #[test]
    fn test_addressless_output_counts_as_volume_not_recipient() {
        // An OP_RETURN-style output burns 0.1 BTC: no recipient, but the
        // coins still leave the address
        let t = tx(&[Some("A")], &[(None, 10_000_000), (Some("B"), 20_000_000)]);
        let metrics = aggregate_sending(&[&t], "A");

        assert_eq!(metrics.total_recipients, 1);
        assert_eq!(metrics.total_transferred_btc, 0.3);
    }

    #[test]
    fn test_transferred_distribution_across_transactions() {
        let t1 = tx(&[Some("A")], &[(Some("B"), 200_000_000)]);
        let t2 = tx(&[Some("A")], &[(Some("B"), 400_000_000)]);
        let metrics = aggregate_sending(&[&t1, &t2], "A");

        assert_eq!(metrics.total_transferred_btc, 6.0);
        assert_eq!(metrics.avg_transferred_btc, 3.0);
        assert_eq!(metrics.min_transferred_btc, 2.0);
        assert_eq!(metrics.max_transferred_btc, 4.0);
        // Population std-dev of [2, 4]: divisor N gives exactly 1
        assert_eq!(metrics.transferred_std_dev, 1.0);
    }

    #[test]
    fn test_single_receiving_transaction() {
        // C pays A 1.2 BTC
        let t = tx(&[Some("C")], &[(Some("A"), 120_000_000)]);
        let metrics = aggregate_receiving(&[&t], "A");

        assert_eq!(metrics.tx_count, 1);
        assert_eq!(metrics.total_senders, 1);
        assert_eq!(metrics.unique_senders, 1);
        assert_eq!(metrics.total_received_btc, 1.2);
        assert_eq!(metrics.avg_received_btc, 1.2);
        assert_eq!(metrics.min_received_btc, 1.2);
        assert_eq!(metrics.max_received_btc, 1.2);
        assert_eq!(metrics.received_std_dev, 0.0);
        assert_eq!(metrics.avg_btc_per_sender, 1.2);
    }

    #[test]
    fn test_receiving_excludes_target_from_senders() {
        // A consolidates its own coins alongside sender C
        let t = tx(
            &[Some("A"), Some("C")],
            &[(Some("A"), 50_000_000)],
        );
        let metrics = aggregate_receiving(&[&t], "A");

        assert_eq!(metrics.total_senders, 1);
        assert_eq!(metrics.unique_senders, 1);
        assert_eq!(metrics.avg_senders_per_tx, 1.0);
    }

    #[test]
    fn test_receiving_includes_target_among_receivers() {
        // Payment to A with a change output back to sender C
        let t = tx(
            &[Some("C")],
            &[(Some("A"), 100_000_000), (Some("C"), 40_000_000)],
        );
        let metrics = aggregate_receiving(&[&t], "A");

        assert_eq!(metrics.total_receivers, 2);
        assert_eq!(metrics.unique_receivers, 2);
        // Only the output paying A counts as received
        assert_eq!(metrics.total_received_btc, 1.0);
    }

    #[test]
    fn test_receiving_with_no_identifiable_senders() {
        // Coinbase-style: no previous-output addresses at all
        let t = tx(&[None], &[(Some("A"), 625_000_000)]);
        let metrics = aggregate_receiving(&[&t], "A");

        assert_eq!(metrics.total_senders, 0);
        assert_eq!(metrics.unique_senders, 0);
        assert_eq!(metrics.total_received_btc, 6.25);
        // Guarded denominator: no senders means 0, not a division error
        assert_eq!(metrics.avg_btc_per_sender, 0.0);
    }

    #[test]
    fn test_receiver_count_variation() {
        let t1 = tx(&[Some("C")], &[(Some("A"), 1000)]);
        let t2 = tx(
            &[Some("C")],
            &[(Some("A"), 1000), (Some("D"), 1000), (Some("E"), 1000)],
        );
        let metrics = aggregate_receiving(&[&t1, &t2], "A");

        assert_eq!(metrics.total_receivers, 4);
        assert_eq!(metrics.unique_receivers, 3);
        assert_eq!(metrics.avg_receivers_per_tx, 2.0);
        assert_eq!(metrics.max_receivers_in_tx, 3);
        assert_eq!(metrics.min_receivers_in_tx, 1);
        // Population std-dev of [1, 3] is 1
        assert_eq!(metrics.receivers_std_dev, 1.0);
    }
}
