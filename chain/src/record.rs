//! Transaction record carried by each block.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One transfer of value between two parties.
///
/// Values are free-form: empty names and zero or negative amounts are
/// accepted. The ledger records transactions, it does not judge them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub(crate) sender: String,
    pub(crate) receiver: String,
    pub(crate) amount: f64,
}

impl Record {
    /// Create a new record.
    pub fn new(sender: impl Into<String>, receiver: impl Into<String>, amount: f64) -> Self {
        Self {
            sender: sender.into(),
            receiver: receiver.into(),
            amount,
        }
    }

    /// The record placed in the genesis block.
    pub fn genesis() -> Self {
        Self::new("Genesis", "None", 0.0)
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn receiver(&self) -> &str {
        &self.receiver
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }
}

/// Canonical text form fed into the block hash.
///
/// Names are debug-quoted, so embedded quotes and separators are escaped and
/// two different records never render to the same text.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Record {{ sender: {:?}, receiver: {:?}, amount: {:?} }}",
            self.sender, self.receiver, self.amount
        )
    }
}
