//! In-memory fetcher that counts downloads.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::MessageFetcher;
use crate::error::{IntuitionError, Result};

/// Serves canned documents per domain. Clones share payloads and the counter.
#[derive(Debug, Clone, Default)]
pub(crate) struct FakeFetcher {
    payloads: Arc<Mutex<HashMap<String, String>>>,
    calls: Arc<AtomicUsize>,
}

impl FakeFetcher {
    pub(crate) fn with_payload(domain: &str, document: &str) -> Self {
        let fetcher = Self::default();
        fetcher.set_payload(domain, document);
        fetcher
    }

    pub(crate) fn set_payload(&self, domain: &str, document: &str) {
        self.payloads
            .lock()
            .unwrap()
            .insert(domain.to_string(), document.to_string());
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl MessageFetcher for FakeFetcher {
    fn fetch(&self, domain: &str, _language: &str) -> Result<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.payloads
            .lock()
            .unwrap()
            .get(domain)
            .map(|document| document.clone().into_bytes())
            .ok_or_else(|| IntuitionError::Fetch(format!("no route to service for {}", domain)))
    }
}
