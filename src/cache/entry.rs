//! Cache Entry Module
//!
//! Defines the in-memory record of one (domain, language) message set.

use chrono::{DateTime, Duration, Utc};

use crate::cache::clock::is_outdated;
use crate::cache::MessageSet;

// == Cache Entry ==
/// Message set for one (domain, language) pair and the time it was loaded.
///
/// Entries are replaced wholesale on refresh, never patched.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The localized messages keyed by message key
    pub messages: MessageSet,
    /// When the messages were put into memory
    pub loaded_at: DateTime<Utc>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with `loaded_at`.
    pub fn new(messages: MessageSet, loaded_at: DateTime<Utc>) -> Self {
        Self {
            messages,
            loaded_at,
        }
    }

    // == Is Fresh ==
    /// Checks if the entry may still be served.
    ///
    /// Fresh iff `now - loaded_at <= cache_time`.
    pub fn is_fresh(&self, now: DateTime<Utc>, cache_time: Duration) -> bool {
        !is_outdated(self.loaded_at, now, cache_time)
    }

    // == Age ==
    /// Returns how long ago the entry was loaded.
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.loaded_at
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn sample_messages() -> MessageSet {
        MessageSet::from([("title".to_string(), "Title".to_string())])
    }

    #[test]
    fn test_entry_creation() {
        let now = Utc::now();
        let entry = CacheEntry::new(sample_messages(), now);

        assert_eq!(entry.messages.get("title").map(String::as_str), Some("Title"));
        assert_eq!(entry.loaded_at, now);
        assert_eq!(entry.age(now), Duration::zero());
    }

    #[test]
    fn test_entry_freshness() {
        let loaded_at = Utc::now();
        let entry = CacheEntry::new(sample_messages(), loaded_at);
        let window = Duration::seconds(60);

        assert!(entry.is_fresh(loaded_at + Duration::seconds(30), window));
        assert!(entry.is_fresh(loaded_at + window, window));
        assert!(!entry.is_fresh(loaded_at + Duration::seconds(61), window));
    }
}
