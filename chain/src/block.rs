//! Block structure for the hashledger chain.
//!
//! A block wraps one [`Record`] together with the metadata that links it to
//! its predecessor. Every field is fixed at construction except the nonce,
//! which only the proof-of-work search in [`crate::pow`] advances.

use serde::Serialize;

use crate::record::Record;
use crate::types::{Hash, Hashable};

/// Previous-hash sentinel carried by the genesis block.
pub const GENESIS_PREV_HASH: &str = "0";

/// Wall-clock format of [`Block::timestamp`].
pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S";

// ---------------------------------------------------------------------------
// Block
// ---------------------------------------------------------------------------

/// A single ledger entry.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub(crate) record: Record,
    pub(crate) creator_id: u64,
    pub(crate) prev_hash: String,
    pub(crate) timestamp: String,
    pub(crate) nonce: u64,
}

impl Block {
    /// Build a candidate block stamped with the current UTC time of day.
    pub fn new(record: Record, creator_id: u64, prev_hash: impl Into<String>) -> Self {
        let timestamp = chrono::Utc::now().format(TIMESTAMP_FORMAT).to_string();
        Self::with_timestamp(record, creator_id, prev_hash, timestamp)
    }

    /// Build a candidate block with an explicit timestamp.
    pub fn with_timestamp(
        record: Record,
        creator_id: u64,
        prev_hash: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            record,
            creator_id,
            prev_hash: prev_hash.into(),
            timestamp: timestamp.into(),
            nonce: 0,
        }
    }

    /// Create the genesis block. Its previous hash is the `"0"` sentinel.
    pub fn genesis(record: Record, creator_id: u64) -> Self {
        Self::new(record, creator_id, GENESIS_PREV_HASH)
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    pub fn creator_id(&self) -> u64 {
        self.creator_id
    }

    pub fn prev_hash(&self) -> &str {
        &self.prev_hash
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    /// Whether this block carries the genesis sentinel.
    pub fn is_genesis(&self) -> bool {
        self.prev_hash == GENESIS_PREV_HASH
    }

    /// Return the hash of this block.
    pub fn block_hash(&self) -> Hash {
        self.hash()
    }

    /// Flatten the block into a display row, including its computed hash.
    pub fn view(&self) -> BlockView {
        BlockView {
            sender: self.record.sender.clone(),
            receiver: self.record.receiver.clone(),
            amount: self.record.amount,
            creator_id: self.creator_id,
            prev_hash: self.prev_hash.clone(),
            timestamp: self.timestamp.clone(),
            nonce: self.nonce,
            hash: self.hash().to_hex(),
        }
    }
}

/// Fields are fed to the digest in this order: record text, creator id,
/// timestamp, previous hash, nonce. Numbers use their decimal text form.
impl Hashable for Block {
    fn to_hash_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(self.record.to_string().as_bytes());
        bytes.extend_from_slice(self.creator_id.to_string().as_bytes());
        bytes.extend_from_slice(self.timestamp.as_bytes());
        bytes.extend_from_slice(self.prev_hash.as_bytes());
        bytes.extend_from_slice(self.nonce.to_string().as_bytes());
        bytes
    }
}

// ---------------------------------------------------------------------------
// BlockView
// ---------------------------------------------------------------------------

/// Read-only, flattened copy of a block for tables and inspectors.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BlockView {
    pub sender: String,
    pub receiver: String,
    pub amount: f64,
    pub creator_id: u64,
    pub prev_hash: String,
    pub timestamp: String,
    pub nonce: u64,
    pub hash: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
