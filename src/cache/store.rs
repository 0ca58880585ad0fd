//! Message Cache Module
//!
//! In-memory layer answering lookups, falling back to the persistent store
//! when an entry is missing or stale.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Duration;
use tracing::{debug, info};

use crate::cache::{CacheEntry, CacheStats, Clock, MessageSet, PersistentStore, SystemClock};
use crate::config::Config;
use crate::error::{IntuitionError, Result};
use crate::fetch::{HttpFetcher, MessageFetcher};

// == Message Cache ==
/// Message lookup with an in-memory cache in front of a [`PersistentStore`].
pub struct MessageCache {
    /// Loaded message sets keyed by (domain, language)
    entries: HashMap<(String, String), CacheEntry>,
    /// Disk and network layer
    store: PersistentStore,
    /// Time source shared with the store
    clock: Arc<dyn Clock>,
    /// Domain used when a lookup names none
    default_domain: Option<String>,
    /// Language used when a lookup names none
    default_language: String,
    /// Reload once when a key is missing
    update_on_missing: bool,
    /// Age after which an entry is loaded again
    cache_time: Duration,
    /// Performance statistics
    stats: CacheStats,
}

impl MessageCache {
    // == Constructors ==
    /// Creates a cache downloading from the configured service over HTTP.
    pub fn from_config(config: &Config) -> Result<Self> {
        let fetcher = HttpFetcher::new(config.download_url.clone())?;
        Self::new(config, Box::new(fetcher), Arc::new(SystemClock))
    }

    /// Creates a cache with an explicit fetcher and clock.
    ///
    /// The translation directory is created here if it does not exist.
    pub fn new(
        config: &Config,
        fetcher: Box<dyn MessageFetcher>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let cache_time = config.cache_duration();
        let store = PersistentStore::new(
            config.translation_path.clone(),
            cache_time,
            fetcher,
            clock.clone(),
        )?;

        Ok(Self {
            entries: HashMap::new(),
            store,
            clock,
            default_domain: config.domain.clone(),
            default_language: config.language.clone(),
            update_on_missing: config.update_on_missing,
            cache_time,
            stats: CacheStats::new(),
        })
    }

    // == Get ==
    /// Returns the message for `key`.
    ///
    /// `domain` and `language` fall back to the configured defaults. With
    /// update-on-missing enabled, an absent key forces one download before
    /// the lookup fails.
    pub fn get(&mut self, key: &str, domain: Option<&str>, language: Option<&str>) -> Result<String> {
        let domain = self.resolve_domain(domain)?;
        let language = language.unwrap_or(self.default_language.as_str()).to_string();

        if let Some(message) = self.get_domain_messages(&domain, &language, false)?.get(key) {
            return Ok(message.clone());
        }

        if self.update_on_missing {
            info!("Key '{}' missing in {}/{}, reloading", key, domain, language);
            if let Some(message) = self.get_domain_messages(&domain, &language, true)?.get(key) {
                return Ok(message.clone());
            }
        }

        self.stats.record_lookup_miss();
        Err(IntuitionError::Lookup {
            key: key.to_string(),
            domain,
        })
    }

    // == Get Domain Messages ==
    /// Returns all messages of `domain` in `language`.
    ///
    /// Serves the in-memory entry while it is fresh and `force_download` is
    /// unset. Otherwise the persistent store produces the messages and they
    /// replace the entry, stamped with the current time.
    pub fn get_domain_messages(
        &mut self,
        domain: &str,
        language: &str,
        force_download: bool,
    ) -> Result<&MessageSet> {
        let slot = (domain.to_string(), language.to_string());
        let now = self.clock.now();

        let fresh = !force_download
            && self
                .entries
                .get(&slot)
                .is_some_and(|entry| entry.is_fresh(now, self.cache_time));

        if fresh {
            debug!("Memory hit for {}/{}", domain, language);
            self.stats.record_memory_hit();
        } else {
            let messages = self.store.load(domain, language, force_download)?;
            debug!("Loaded {} messages for {}/{}", messages.len(), domain, language);
            self.entries
                .insert(slot.clone(), CacheEntry::new(messages, self.clock.now()));
        }

        Ok(&self.entries[&slot].messages)
    }

    // == Accessors ==
    pub fn default_domain(&self) -> Option<&str> {
        self.default_domain.as_deref()
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Returns the persistent store backing this cache.
    pub fn store(&self) -> &PersistentStore {
        &self.store
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.disk_loads = self.store.stats().disk_loads;
        stats.downloads = self.store.stats().downloads;
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the number of (domain, language) entries in memory.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn resolve_domain(&self, domain: Option<&str>) -> Result<String> {
        domain
            .or(self.default_domain.as_deref())
            .map(str::to_string)
            .ok_or_else(|| IntuitionError::Configuration("No domain given".to_string()))
    }
}
