//! Response DTOs for the lookup API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::{CacheStats, MessageSet};

/// Response body for a single message lookup (GET /msg/...)
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    /// Domain the message was looked up in
    pub domain: String,
    /// Language of the message
    pub language: String,
    /// The requested key
    pub key: String,
    /// The localized message
    pub message: String,
}

impl MessageResponse {
    /// Creates a new MessageResponse
    pub fn new(
        domain: impl Into<String>,
        language: impl Into<String>,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            language: language.into(),
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Response body for a whole message set (GET /messages/:domain)
#[derive(Debug, Clone, Serialize)]
pub struct DomainMessagesResponse {
    /// The requested domain
    pub domain: String,
    /// Language of the messages
    pub language: String,
    /// Number of messages in the set
    pub count: usize,
    /// All messages keyed by message key
    pub messages: MessageSet,
}

impl DomainMessagesResponse {
    /// Creates a new DomainMessagesResponse
    pub fn new(domain: impl Into<String>, language: impl Into<String>, messages: MessageSet) -> Self {
        Self {
            domain: domain.into(),
            language: language.into(),
            count: messages.len(),
            messages,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Requests answered from memory
    pub memory_hits: u64,
    /// Reads of persisted message files
    pub disk_loads: u64,
    /// Message sets downloaded from the service
    pub downloads: u64,
    /// Lookups that found no message
    pub lookup_misses: u64,
    /// Current number of (domain, language) entries in memory
    pub total_entries: usize,
    /// Memory hit rate (memory_hits / (memory_hits + disk_loads))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            memory_hits: stats.memory_hits,
            disk_loads: stats.disk_loads,
            downloads: stats.downloads,
            lookup_misses: stats.lookup_misses,
            total_entries: stats.total_entries,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
