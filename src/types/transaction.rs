//! Wire types for the Blockchain.info `rawaddr` endpoint
//!
//! Every address field is optional: coinbase inputs have no previous
//! output, and nonstandard outputs (OP_RETURN, bare multisig) have no
//! decoded address. Absent fields deserialise to `None` and are treated
//! as "no match" everywhere, never as an error.

use serde::{Deserialize, Serialize};

/// Address envelope returned by `GET /rawaddr/{address}`
///
/// Balance fields are integers in satoshis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressHistory {
    pub address: String,
    #[serde(default)]
    pub final_balance: u64,
    #[serde(default)]
    pub total_received: u64,
    #[serde(default)]
    pub total_sent: u64,
    #[serde(default)]
    pub n_tx: u64,
    #[serde(default)]
    pub txs: Vec<Transaction>,
}

/// A single transaction from the address history
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub time: Option<i64>,
    #[serde(default)]
    pub inputs: Vec<TxInput>,
    #[serde(default, rename = "out")]
    pub outputs: Vec<TxOutput>,
}

/// Transaction input carrying the previous output it spends
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TxInput {
    #[serde(default)]
    pub prev_out: Option<PrevOut>,
}

/// Previous output referenced by an input
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrevOut {
    #[serde(default)]
    pub addr: Option<String>,
    #[serde(default)]
    pub value: u64,
}

/// Transaction output with its decoded address (if any) and value in satoshis
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TxOutput {
    #[serde(default)]
    pub addr: Option<String>,
    #[serde(default)]
    pub value: u64,
}

impl TxInput {
    /// Address of the previous output this input spends, if decoded
    pub fn source_address(&self) -> Option<&str> {
        self.prev_out.as_ref().and_then(|p| p.addr.as_deref())
    }
}

impl Transaction {
    /// Does any input spend a previous output belonging to `target`?
    pub fn spends_from(&self, target: &str) -> bool {
        self.inputs
            .iter()
            .any(|input| input.source_address() == Some(target))
    }

    /// Does any output pay `target`?
    pub fn pays_to(&self, target: &str) -> bool {
        self.outputs
            .iter()
            .any(|output| output.addr.as_deref() == Some(target))
    }
}
