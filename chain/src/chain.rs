//! The append-only chain: storage, mining on append, and validation.
//!
//! A [`Chain`] always holds at least its genesis block. Blocks are only ever
//! pushed onto the end, each one mined against the chain's difficulty at the
//! time of the call. Nothing here is shared across threads; mutating calls
//! take `&mut self`, so one owner serializes every append.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::block::Block;
use crate::config::ChainConfig;
use crate::error::{ChainError, Result};
use crate::pow;
use crate::record::Record;
use crate::types::{Hash, Hashable};

/// Difficulty of a chain built with [`Chain::new`].
pub const DEFAULT_DIFFICULTY: u32 = 4;

/// Ordered, hash-linked sequence of blocks plus the mining difficulty.
#[derive(Clone, Debug)]
pub struct Chain {
    blocks: Vec<Block>,
    difficulty: u32,
}

impl Chain {
    /// Start a chain whose genesis block holds `genesis_record`.
    pub fn new(genesis_record: Record, creator_id: u64) -> Self {
        Self::from_genesis(Block::genesis(genesis_record, creator_id))
    }

    /// Start a chain from a prepared genesis block. The genesis block is
    /// stored as given, without mining.
    pub fn from_genesis(genesis: Block) -> Self {
        debug!(hash = %genesis.hash(), "genesis block created");
        Self {
            blocks: vec![genesis],
            difficulty: DEFAULT_DIFFICULTY,
        }
    }

    /// Start a chain from configuration.
    pub fn with_config(config: &ChainConfig) -> Result<Self> {
        let mut chain = Self::new(config.genesis.clone(), config.genesis_creator_id);
        chain.set_difficulty(config.difficulty)?;
        Ok(chain)
    }

    // -----------------------------------------------------------------------
    // Difficulty
    // -----------------------------------------------------------------------

    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }

    /// Change the difficulty used by later appends. Blocks already on the
    /// chain are not touched.
    pub fn set_difficulty(&mut self, difficulty: u32) -> Result<()> {
        pow::check_difficulty(difficulty)?;
        debug!(from = self.difficulty, to = difficulty, "difficulty changed");
        self.difficulty = difficulty;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Appending
    // -----------------------------------------------------------------------

    /// Record a transaction: build a block linked to the current tip, mine
    /// it, and append it.
    ///
    /// Blocks until proof-of-work is found. See [`pow::mine`].
    pub fn add_block(
        &mut self,
        sender: impl Into<String>,
        receiver: impl Into<String>,
        amount: f64,
        creator_id: u64,
    ) -> Result<&Block> {
        let record = Record::new(sender, receiver, amount);
        let candidate = Block::new(record, creator_id, self.tip_hash().to_hex());
        self.add_candidate(candidate)
    }

    /// Mine a caller-built candidate and append it.
    ///
    /// The candidate's previous hash is taken as given. No candidate is ever
    /// rejected; a wrong link only shows up later in [`Chain::is_valid`].
    pub fn add_candidate(&mut self, mut candidate: Block) -> Result<&Block> {
        pow::mine(&mut candidate, self.difficulty)?;
        self.blocks.push(candidate);
        debug!(height = self.blocks.len() - 1, "block appended");
        Ok(self.tip())
    }

    // -----------------------------------------------------------------------
    // Read access
    // -----------------------------------------------------------------------

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn block(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    /// Look up a block, failing with [`ChainError::BlockNotFound`].
    pub fn get_block(&self, index: usize) -> Result<&Block> {
        self.block(index).ok_or(ChainError::BlockNotFound(index))
    }

    /// The most recently appended block.
    pub fn tip(&self) -> &Block {
        // The genesis block is never removed.
        &self.blocks[self.blocks.len() - 1]
    }

    pub fn tip_hash(&self) -> Hash {
        self.tip().hash()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the chain holds no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    /// Walk the chain and report the first broken link.
    ///
    /// Each block's previous hash must equal the recomputed hash of the block
    /// before it. The genesis block's sentinel is not checked.
    pub fn validate(&self) -> Result<()> {
        let Some(genesis) = self.blocks.first() else {
            return Ok(());
        };

        let mut running = genesis.hash();
        for (index, block) in self.blocks.iter().enumerate().skip(1) {
            if running != *block.prev_hash() {
                return Err(ChainError::BrokenLink {
                    index,
                    expected: running.to_hex(),
                    found: block.prev_hash().to_string(),
                });
            }
            running = block.hash();
        }
        Ok(())
    }

    /// Whether every block links to the hash of its predecessor.
    pub fn is_valid(&self) -> bool {
        match self.validate() {
            Ok(()) => {
                info!(blocks = self.blocks.len(), "blockchain is valid");
                true
            }
            Err(err) => {
                warn!(%err, "blockchain is invalid");
                false
            }
        }
    }

    // -----------------------------------------------------------------------
    // Summary / Display helpers
    // -----------------------------------------------------------------------

    /// Return a summary of the chain for display.
    pub fn summary(&self) -> ChainSummary {
        ChainSummary {
            blocks: self.blocks.len(),
            difficulty: self.difficulty,
            tip_hash: self.tip_hash().to_hex(),
            total_amount: self
                .blocks
                .iter()
                .skip(1)
                .map(|b| b.record().amount())
                .sum(),
            valid: self.validate().is_ok(),
        }
    }
}

/// Summary of chain state for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChainSummary {
    pub blocks: usize,
    pub difficulty: u32,
    pub tip_hash: String,
    /// Sum of amounts over every block after genesis.
    pub total_amount: f64,
    pub valid: bool,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
