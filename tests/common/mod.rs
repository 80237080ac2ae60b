//! Shared fixture builders for integration tests

use btc_address_analyser::types::{AddressHistory, PrevOut, Transaction, TxInput, TxOutput};

/// Build a transaction with one input per sender address and the given
/// outputs as (address, satoshis) pairs. `None` models an output with
/// no decoded address.
pub fn tx(senders: &[&str], outputs: &[(Option<&str>, u64)]) -> Transaction {
    Transaction {
        inputs: senders
            .iter()
            .map(|sender| TxInput {
                prev_out: Some(PrevOut {
                    addr: Some(sender.to_string()),
                    value: 0,
                }),
            })
            .collect(),
        outputs: outputs
            .iter()
            .map(|(addr, value)| TxOutput {
                addr: addr.map(str::to_string),
                value: *value,
            })
            .collect(),
        ..Default::default()
    }
}

/// Build an address history envelope around a transaction list.
pub fn history(address: &str, final_balance: u64, txs: Vec<Transaction>) -> AddressHistory {
    AddressHistory {
        address: address.to_string(),
        final_balance,
        total_received: 0,
        total_sent: 0,
        n_tx: txs.len() as u64,
        txs,
    }
}
