//! Page and image retrieval.
//!
//! The summarizer session and the PDF renderer never talk to the network
//! directly; they go through a [`Fetcher`], so tests can substitute canned
//! responses.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, instrument};

use crate::encoding;
use crate::error::Result;

/// User agent sent by [`HttpFetcher`] unless overridden.
pub const DEFAULT_USER_AGENT: &str = concat!("article-digest/", env!("CARGO_PKG_VERSION"));

/// Retrieves the raw bytes behind a URL.
pub trait Fetcher {
    /// Fetch the body at `url`.
    ///
    /// # Errors
    ///
    /// Returns an error when the resource cannot be retrieved.
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>>;

    /// Fetch an HTML page and decode it using its declared charset.
    ///
    /// # Errors
    ///
    /// Propagates [`Fetcher::fetch_bytes`] failures.
    fn fetch_html(&self, url: &str) -> Result<String> {
        let bytes = self.fetch_bytes(url)?;
        Ok(encoding::transcode_to_utf8(&bytes))
    }
}

impl<T: Fetcher + ?Sized> Fetcher for &T {
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        (**self).fetch_bytes(url)
    }
}

/// Blocking HTTP fetcher backed by `reqwest`.
///
/// Non-success status codes are reported as errors.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    user_agent: String,
    timeout: Option<Duration>,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

impl HttpFetcher {
    /// Create a fetcher with the default user agent and no timeout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Give up on requests that take longer than `timeout`.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn client(&self) -> Result<Client> {
        let client = Client::builder()
            .user_agent(self.user_agent.as_str())
            .timeout(self.timeout)
            .build()?;
        Ok(client)
    }
}

impl Fetcher for HttpFetcher {
    #[instrument(skip(self))]
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client()?.get(url).send()?.error_for_status()?;
        let bytes = response.bytes()?;
        debug!(len = bytes.len(), "fetched response body");
        Ok(bytes.to_vec())
    }
}
