//! Proof-of-work search for the hashledger chain.
//!
//! A block satisfies difficulty `d` when the hex rendering of its hash starts
//! with `d` `'0'` characters. [`mine`] finds such a block by bumping the nonce
//! one step at a time until the target is met:
//! - the search is linear and single-threaded, and blocks its caller
//! - there is no iteration bound; expected work grows as `16^d`
//! - it starts from the block's current nonce, so re-mining a mined block is free
//!
//! Difficulty is an operator setting and is expected to stay small (1 to 5).

use std::time::Instant;

use tracing::info;

use crate::block::Block;
use crate::error::{ChainError, Result};
use crate::types::{Hash, Hashable, HASH_HEX_LEN};

/// Highest difficulty a 64-digit hex digest can ever satisfy.
pub const MAX_DIFFICULTY: u32 = HASH_HEX_LEN;

/// Reject difficulties no digest can meet.
pub fn check_difficulty(difficulty: u32) -> Result<()> {
    if difficulty > MAX_DIFFICULTY {
        return Err(ChainError::DifficultyTooHigh {
            requested: difficulty,
            max: MAX_DIFFICULTY,
        });
    }
    Ok(())
}

/// Whether `hash` has at least `difficulty` leading zero hex digits.
pub fn meets_difficulty(hash: &Hash, difficulty: u32) -> bool {
    hash.leading_zero_digits() >= difficulty
}

/// Advance `block.nonce` until the block hash meets `difficulty`.
///
/// Returns the winning hash. This call may run for a long time at high
/// difficulty. Fails with [`ChainError::NonceExhausted`] instead of wrapping
/// the nonce counter.
pub fn mine(block: &mut Block, difficulty: u32) -> Result<Hash> {
    check_difficulty(difficulty)?;

    let start = Instant::now();
    let mut attempts: u64 = 1;
    let mut hash = block.hash();

    while !meets_difficulty(&hash, difficulty) {
        block.nonce = block
            .nonce
            .checked_add(1)
            .ok_or(ChainError::NonceExhausted { attempts })?;
        attempts = attempts.saturating_add(1);
        hash = block.hash();
    }

    info!(
        hash = %hash,
        nonce = block.nonce,
        attempts,
        difficulty,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "winning hash"
    );

    Ok(hash)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
