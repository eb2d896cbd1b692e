//! Core types used throughout the hashledger chain.

use sha2::{Digest, Sha256};
use std::fmt;

// ---------------------------------------------------------------------------
// Hash — 32-byte SHA-256 digest wrapper
// ---------------------------------------------------------------------------

/// Number of hex digits in a rendered digest.
pub const HASH_HEX_LEN: u32 = 64;

/// A SHA-256 hash digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hash(pub [u8; 32]);

impl Hash {
    /// Create a hash from raw bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Compute SHA-256 of arbitrary data.
    pub fn compute(data: &[u8]) -> Self {
        let digest = Sha256::digest(data);
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&digest);
        Self(bytes)
    }

    /// Return the lowercase hex-encoded representation.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Count the leading `'0'` characters of the hex rendering.
    pub fn leading_zero_digits(&self) -> u32 {
        let mut count = 0;
        for byte in self.0 {
            if byte == 0 {
                count += 2;
                continue;
            }
            if byte >> 4 == 0 {
                count += 1;
            }
            break;
        }
        count
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({}..{})", &self.to_hex()[..8], &self.to_hex()[56..])
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl PartialEq<str> for Hash {
    fn eq(&self, other: &str) -> bool {
        self.to_hex() == other
    }
}

// ---------------------------------------------------------------------------
// Hashable trait
// ---------------------------------------------------------------------------

/// Trait for types that can produce a canonical byte representation for hashing.
pub trait Hashable {
    /// Serialize to canonical bytes for hashing.
    fn to_hash_bytes(&self) -> Vec<u8>;

    /// Compute the SHA-256 hash of the canonical bytes.
    fn hash(&self) -> Hash {
        Hash::compute(&self.to_hash_bytes())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
