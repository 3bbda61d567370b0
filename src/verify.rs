//! Media verification flow
//!
//! Cross-checks the digests recorded on-chain at mint time against freshly
//! fetched off-chain content. The chain and HTTP collaborators sit behind
//! traits so the flow stays testable without a node or a network.

use thiserror::Error;

use crate::digest::ContentDigest;
use crate::error::Result;

/// Transport failure from the content-fetch collaborator.
///
/// Never surfaced by `verify_media`; a failed fetch is an unverified piece
/// of media, not an error.
#[derive(Error, Debug, Clone)]
pub enum FetchError {
    #[error("request for {uri} failed: {reason}")]
    Transport { uri: String, reason: String },

    #[error("request for {uri} returned status {status}")]
    Status { uri: String, status: u16 },
}

/// Collaborator returning the raw bytes behind a URI.
///
/// A single attempt, bounded by the implementation's timeout; retry policy
/// belongs to the caller.
pub trait ContentFetcher {
    fn fetch(&self, uri: &str) -> std::result::Result<Vec<u8>, FetchError>;
}

/// Collaborator reading a token's recorded media data from chain.
///
/// Read failures (e.g. the token does not exist) propagate to the caller,
/// unlike fetch failures.
pub trait MediaReader {
    fn content_uri(&self, token_id: u64) -> Result<String>;
    fn metadata_uri(&self, token_id: u64) -> Result<String>;
    fn content_hash(&self, token_id: u64) -> Result<ContentDigest>;
    fn metadata_hash(&self, token_id: u64) -> Result<ContentDigest>;
}

/// Verify that a token's off-chain content still matches its on-chain
/// record.
///
/// Fetches the primary content and the metadata document concurrently (the
/// two are unrelated reads) and verifies each against its recorded digest.
/// Returns `Ok(true)` only if both verify; a fetch failure or digest
/// mismatch is `Ok(false)`.
pub fn verify_media<R, F>(reader: &R, fetcher: &F, token_id: u64) -> Result<bool>
where
    R: MediaReader,
    F: ContentFetcher + Sync,
{
    let content_uri = reader.content_uri(token_id)?;
    let metadata_uri = reader.metadata_uri(token_id)?;
    let content_hash = reader.content_hash(token_id)?;
    let metadata_hash = reader.metadata_hash(token_id)?;

    let verified = std::thread::scope(|scope| {
        let content = scope.spawn(|| verify_one("content", &content_uri, &content_hash, fetcher));
        let metadata_ok = verify_one("metadata", &metadata_uri, &metadata_hash, fetcher);
        let content_ok = match content.join() {
            Ok(ok) => ok,
            Err(panic) => std::panic::resume_unwind(panic),
        };
        content_ok && metadata_ok
    });

    Ok(verified)
}

fn verify_one(kind: &str, uri: &str, recorded: &ContentDigest, fetcher: &dyn ContentFetcher) -> bool {
    match fetcher.fetch(uri) {
        Ok(bytes) => {
            let verified = recorded.verify(&bytes);
            if !verified {
                tracing::debug!(kind, uri, recorded = %recorded, "digest mismatch");
            }
            verified
        }
        Err(error) => {
            tracing::debug!(kind, uri, %error, "fetch failed, treating media as unverified");
            false
        }
    }
}
