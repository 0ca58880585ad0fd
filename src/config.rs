//! Configuration Module
//!
//! Handles loading and managing lookup configuration from environment variables.

use std::env;
use std::path::PathBuf;

use directories::BaseDirs;

/// URL the message sets are downloaded from.
pub const DEFAULT_DOWNLOAD_URL: &str = "https://tools.wmflabs.org/intuition/api.php";

/// Language used when neither the caller nor a cookie provides one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Cache lifetime in seconds shared by the memory and disk layers.
pub const DEFAULT_CACHE_TIME: u64 = 3600;

/// Lookup configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Domain used when a lookup names none
    pub domain: Option<String>,
    /// Language used when a lookup names none
    pub language: String,
    /// Directory holding one `<domain>_<language>.json` file per message set
    pub translation_path: PathBuf,
    /// Seconds after which cached messages (memory or disk) are stale
    pub cache_time: u64,
    /// Reload the messages once when a key is missing
    pub update_on_missing: bool,
    /// Base URL of the message service
    pub download_url: String,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `INTUITION_DOMAIN` - Default domain (default: none)
    /// - `INTUITION_LANGUAGE` - Default language (default: en)
    /// - `INTUITION_PATH` - Translation directory (default: ~/intuition)
    /// - `INTUITION_CACHE_TIME` - Cache lifetime in seconds (default: 3600)
    /// - `INTUITION_UPDATE_ON_MISSING` - Reload on missing keys (default: false)
    /// - `INTUITION_URL` - Message service URL
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            domain: env::var("INTUITION_DOMAIN")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            language: env::var("INTUITION_LANGUAGE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.language),
            translation_path: env::var("INTUITION_PATH")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.translation_path),
            cache_time: env::var("INTUITION_CACHE_TIME")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_time),
            update_on_missing: env::var("INTUITION_UPDATE_ON_MISSING")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.update_on_missing),
            download_url: env::var("INTUITION_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.download_url),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
        }
    }

    /// Returns the cache lifetime as a chrono duration.
    pub fn cache_duration(&self) -> chrono::Duration {
        // chrono durations are bounded by i64 milliseconds
        let secs = self.cache_time.min((i64::MAX / 1000) as u64) as i64;
        chrono::Duration::seconds(secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain: None,
            language: DEFAULT_LANGUAGE.to_string(),
            translation_path: default_translation_path(),
            cache_time: DEFAULT_CACHE_TIME,
            update_on_missing: false,
            download_url: DEFAULT_DOWNLOAD_URL.to_string(),
            server_port: 3000,
        }
    }
}

/// `~/intuition`, or `./intuition` when no home directory is known.
fn default_translation_path() -> PathBuf {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join("intuition"))
        .unwrap_or_else(|| PathBuf::from("intuition"))
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
