//! Fetch Module
//!
//! Downloads raw message documents from the message service.

mod http;

#[cfg(test)]
pub(crate) mod fake;

pub use http::HttpFetcher;

use crate::error::Result;

// == Message Fetcher ==
/// Source of raw message documents for a (domain, language) pair.
///
/// Implementations return the response body verbatim; parsing is left to
/// the persistent store. Failures are reported as `IntuitionError::Fetch`
/// and are never retried here.
pub trait MessageFetcher: Send + Sync {
    /// Downloads the document holding `domain`'s messages in `language`.
    fn fetch(&self, domain: &str, language: &str) -> Result<Vec<u8>>;
}
