//! Identity hashing into the ring's 256-bit key space.
//!
//! Virtual-node labels and lookup keys are hashed with SHA-256 into the same
//! identifier space. Comparing the big-endian digest bytes lexicographically
//! is the same as comparing the digests as 256-bit numbers, so `HashId`'s
//! derived `Ord` gives the numeric ring order directly.

use sha2::{Digest, Sha256};
use std::fmt;

/// A position in the 256-bit ring key space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HashId([u8; 32]);

impl HashId {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for HashId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// Hashes arbitrary bytes to a ring position.
///
/// Deterministic across processes and restarts, which is what makes ring
/// placement reproducible for a given node list.
pub fn hash_bytes(data: &[u8]) -> HashId {
    let mut hasher = Sha256::new();
    hasher.update(data);
    HashId(hasher.finalize().into())
}

pub fn hash_str(data: &str) -> HashId {
    hash_bytes(data.as_bytes())
}
