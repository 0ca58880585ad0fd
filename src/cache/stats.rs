//! Cache Statistics Module
//!
//! Tracks which layer answered each message-set request.

use serde::Serialize;

// == Cache Stats ==
/// Tracks cache performance metrics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Requests answered from memory
    pub memory_hits: u64,
    /// Reads of a persisted message file
    pub disk_loads: u64,
    /// Message sets downloaded from the service
    pub downloads: u64,
    /// Lookups that ended without a message for the key
    pub lookup_misses: u64,
    /// Current number of (domain, language) entries in memory
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the share of requests answered from memory.
    ///
    /// Returns memory_hits / (memory_hits + disk_loads), or 0.0 if nothing was requested.
    pub fn hit_rate(&self) -> f64 {
        let total = self.memory_hits + self.disk_loads;
        if total == 0 {
            0.0
        } else {
            self.memory_hits as f64 / total as f64
        }
    }

    pub fn record_memory_hit(&mut self) {
        self.memory_hits += 1;
    }

    pub fn record_disk_load(&mut self) {
        self.disk_loads += 1;
    }

    pub fn record_download(&mut self) {
        self.downloads += 1;
    }

    pub fn record_lookup_miss(&mut self) {
        self.lookup_misses += 1;
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
