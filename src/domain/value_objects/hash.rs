//! Content Digest Value Object
//!
//! A validated, immutable SHA-256 digest of an asset's bytes.
//! The lowercase hex form doubles as the asset's file stem.

use std::fmt;

use sha2::{Digest, Sha256};

/// SHA-256 digest in lowercase hexadecimal
///
/// Always 64 characters from `[0-9a-f]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentDigest(String);

impl ContentDigest {
    /// Compute the SHA-256 digest of `content`
    pub fn from_bytes(content: &[u8]) -> Self {
        let hash = Sha256::digest(content);
        Self(format!("{:x}", hash))
    }

    /// Get the hex string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if `content` hashes to this digest
    pub fn matches(&self, content: &[u8]) -> bool {
        Self::from_bytes(content) == *self
    }
}

/// Compute the lowercase hex SHA-256 of `content`
pub fn compute_digest(content: &[u8]) -> ContentDigest {
    ContentDigest::from_bytes(content)
}

impl fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
