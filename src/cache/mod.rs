//! Cache Module
//!
//! Two-tier message caching: an in-memory layer with time-based expiry,
//! backed by per-(domain, language) files that expire independently.

use std::collections::HashMap;

mod clock;
mod entry;
mod persist;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use clock::{is_outdated, Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use persist::{parse_document, PersistentStore};
pub use stats::CacheStats;
pub use store::MessageCache;

/// Localized messages of one domain and language, keyed by message key.
pub type MessageSet = HashMap<String, String>;
