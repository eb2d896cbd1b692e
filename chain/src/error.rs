//! Error types for the hashledger chain.

use thiserror::Error;

/// Top-level error type for chain operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChainError {
    #[error("nonce space exhausted after {attempts} attempts")]
    NonceExhausted { attempts: u64 },

    #[error("difficulty {requested} is unreachable: a digest has only {max} hex digits")]
    DifficultyTooHigh { requested: u32, max: u32 },

    #[error("broken link at block {index}: expected previous hash {expected}, found {found}")]
    BrokenLink {
        index: usize,
        expected: String,
        found: String,
    },

    #[error("block not found: {0}")]
    BlockNotFound(usize),
}

/// Result type alias using ChainError.
pub type Result<T> = std::result::Result<T, ChainError>;
