//! Media data records
//!
//! The on-chain record for a minted piece of media: where its content and
//! metadata live, and the digests binding that content to the token.

use serde::{Deserialize, Serialize};

use crate::digest::ContentDigest;
use crate::error::{MetadataError, Result};

/// The data recorded on-chain for a piece of media
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaData {
    /// URI of the primary content
    pub token_uri: String,
    /// URI of the metadata document
    pub metadata_uri: String,
    /// Digest of the primary content bytes
    pub content_hash: ContentDigest,
    /// Digest of the canonical metadata bytes
    pub metadata_hash: ContentDigest,
}

impl MediaData {
    /// Construct a media record, enforcing the protocol's URI invariant:
    /// both URIs must begin with `https://`.
    pub fn new(
        token_uri: impl Into<String>,
        metadata_uri: impl Into<String>,
        content_hash: ContentDigest,
        metadata_hash: ContentDigest,
    ) -> Result<Self> {
        let token_uri = token_uri.into();
        let metadata_uri = metadata_uri.into();
        ensure_https(&token_uri)?;
        ensure_https(&metadata_uri)?;

        Ok(Self {
            token_uri,
            metadata_uri,
            content_hash,
            metadata_hash,
        })
    }
}

/// The protocol only accepts `https://` URIs for minted media
pub fn ensure_https(uri: &str) -> Result<()> {
    if uri.starts_with("https://") {
        Ok(())
    } else {
        Err(MetadataError::InvalidUri(uri.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digests() -> (ContentDigest, ContentDigest) {
        (
            ContentDigest::from_bytes(b"content"),
            ContentDigest::from_bytes(b"metadata"),
        )
    }

    #[test]
    fn test_construct_media_data() {
        let (content_hash, metadata_hash) = digests();
        let media = MediaData::new(
            "https://example.com",
            "https://metadata.com",
            content_hash.clone(),
            metadata_hash.clone(),
        )
        .unwrap();
        assert_eq!(media.token_uri, "https://example.com");
        assert_eq!(media.content_hash, content_hash);
        assert_eq!(media.metadata_hash, metadata_hash);
    }

    #[test]
    fn test_rejects_non_https_token_uri() {
        let (content_hash, metadata_hash) = digests();
        let err = MediaData::new(
            "http://example.com",
            "https://metadata.com",
            content_hash,
            metadata_hash,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "http://example.com must begin with `https://`"
        );
    }

    #[test]
    fn test_rejects_non_https_metadata_uri() {
        let (content_hash, metadata_hash) = digests();
        let err = MediaData::new(
            "https://example.com",
            "http://metadata.com",
            content_hash,
            metadata_hash,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "http://metadata.com must begin with `https://`"
        );
    }
}
