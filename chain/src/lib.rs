//! Hashledger Chain — an in-memory, append-only ledger.
//!
//! Each block holds one transaction record and the hash of its predecessor,
//! and is admitted only after a proof-of-work search. The chain can be
//! re-walked at any time to detect tampering.

pub mod block;
pub mod chain;
pub mod config;
pub mod error;
pub mod pow;
pub mod record;
pub mod types;

pub use block::{Block, BlockView, GENESIS_PREV_HASH};
pub use chain::{Chain, ChainSummary, DEFAULT_DIFFICULTY};
pub use config::ChainConfig;
pub use error::{ChainError, Result};
pub use record::Record;
pub use types::{Hash, Hashable};
