//! HTTP content fetching
//!
//! The production `ContentFetcher`: a blocking HTTP client with a
//! per-request timeout and no retries. Anything other than a success
//! status is a `FetchError`, which the verification flow folds into an
//! unverified result.

use std::time::Duration;

use crate::verify::{ContentFetcher, FetchError};

/// Default per-request timeout for content fetches
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout-bound HTTP fetcher over `reqwest::blocking`
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Build a fetcher with the given per-request timeout
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl ContentFetcher for HttpFetcher {
    fn fetch(&self, uri: &str) -> Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .get(uri)
            .send()
            .map_err(|e| FetchError::Transport {
                uri: uri.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                uri: uri.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().map_err(|e| FetchError::Transport {
            uri: uri.to_string(),
            reason: e.to_string(),
        })?;
        Ok(bytes.to_vec())
    }
}
