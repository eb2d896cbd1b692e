//! Chain construction settings.

use serde::{Deserialize, Serialize};

use crate::chain::DEFAULT_DIFFICULTY;
use crate::record::Record;

/// Settings for a fresh chain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Leading zero hex digits required of each mined block.
    pub difficulty: u32,
    /// Record stored in the genesis block.
    pub genesis: Record,
    /// Creator id stamped on the genesis block.
    pub genesis_creator_id: u64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            difficulty: DEFAULT_DIFFICULTY,
            genesis: Record::genesis(),
            genesis_creator_id: 0,
        }
    }
}
