//! Content digests for media and metadata integrity
//!
//! A digest binds off-chain content to an on-chain record: the protocol
//! stores `sha256(content)` at mint time and anyone can later re-fetch the
//! content and recompute it.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

use crate::error::MetadataError;

/// SHA-256 content digest: 64 lowercase hex characters, no prefix
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentDigest(String);

impl ContentDigest {
    /// Compute the digest of a byte buffer
    pub fn from_bytes(data: &[u8]) -> Self {
        let hash = Sha256::digest(data);
        Self(format!("{:x}", hash))
    }

    /// Parse a declared digest string.
    ///
    /// On-chain values circulate `0x`-prefixed; the prefix is stripped.
    /// Anything other than 64 lowercase hex characters is rejected.
    pub fn from_hex(digest: &str) -> Result<Self, MetadataError> {
        let bare = digest.strip_prefix("0x").unwrap_or(digest);
        let well_formed = bare.len() == 64
            && bare
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));

        if !well_formed {
            return Err(MetadataError::InvalidDigest(digest.to_string()));
        }
        Ok(Self(bare.to_string()))
    }

    /// The bare hex string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Verify that a byte buffer hashes to this digest
    pub fn verify(&self, data: &[u8]) -> bool {
        let computed = Self::from_bytes(data);
        self.0 == computed.0
    }
}

impl fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_shape() {
        let digest = ContentDigest::from_bytes(b"invert");
        assert_eq!(digest.as_str().len(), 64);
        assert!(digest.as_str().chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(digest.as_str(), digest.as_str().to_lowercase());
    }

    #[test]
    fn test_digest_determinism() {
        let first = ContentDigest::from_bytes(b"internet renaissance");
        let second = ContentDigest::from_bytes(b"internet renaissance");
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_bit_avalanche() {
        // flip the low bit of the last byte
        let digest_a = ContentDigest::from_bytes(b"wonzimer whitepapes");
        let digest_b = ContentDigest::from_bytes(b"wonzimer whitepaper");
        assert_ne!(digest_a, digest_b);

        let matching = digest_a
            .as_str()
            .chars()
            .zip(digest_b.as_str().chars())
            .filter(|(a, b)| a == b)
            .count();
        // unrelated-looking digests share few hex positions by chance
        assert!(matching < 16);
    }

    #[test]
    fn test_known_vector() {
        // sha256 of the empty input
        let digest = ContentDigest::from_bytes(b"");
        assert_eq!(
            digest.as_str(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_from_hex_accepts_prefixed() {
        let computed = ContentDigest::from_bytes(b"invert");
        let prefixed = format!("0x{}", computed.as_str());
        let parsed = ContentDigest::from_hex(&prefixed).unwrap();
        assert_eq!(parsed, computed);
    }

    #[test]
    fn test_from_hex_rejects_malformed() {
        assert!(ContentDigest::from_hex("abc123").is_err());
        assert!(ContentDigest::from_hex(&"g".repeat(64)).is_err());
        // uppercase digests are rejected, comparisons are case-sensitive
        let upper = ContentDigest::from_bytes(b"invert").as_str().to_uppercase();
        assert!(ContentDigest::from_hex(&upper).is_err());
    }

    #[test]
    fn test_verify() {
        let digest = ContentDigest::from_bytes(b"invert");
        assert!(digest.verify(b"invert"));
        assert!(!digest.verify(b"revert"));
    }
}
