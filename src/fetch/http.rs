//! HTTP Fetcher
//!
//! Blocking HTTP client for the message service API.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use super::MessageFetcher;
use crate::error::{IntuitionError, Result};

/// Connection timeout for the message service.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

// == HTTP Fetcher ==
/// Fetches `GET <base_url>?domains=<domain>&lang=<language>`.
///
/// Uses a blocking client; call it from a blocking context such as
/// `tokio::task::spawn_blocking` when running inside a runtime.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    base_url: String,
}

impl HttpFetcher {
    // == Constructor ==
    /// Creates a fetcher for the service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("intuition/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| IntuitionError::Fetch(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Returns the service URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl MessageFetcher for HttpFetcher {
    fn fetch(&self, domain: &str, language: &str) -> Result<Vec<u8>> {
        debug!("Downloading messages for {}/{} from {}", domain, language, self.base_url);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("domains", domain), ("lang", language)])
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|e| IntuitionError::Fetch(e.to_string()))?;

        let body = response
            .bytes()
            .map_err(|e| IntuitionError::Fetch(e.to_string()))?;

        Ok(body.to_vec())
    }
}
