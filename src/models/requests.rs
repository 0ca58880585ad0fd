//! Request DTOs for the lookup API
//!
//! Defines the query parameters accepted by the lookup endpoints.

use serde::Deserialize;

/// Query string for `GET /msg/...` and `GET /messages/:domain`
///
/// # Fields
/// - `lang`: Language override; wins over the `TsIntuition_userlang` cookie
/// - `force`: Download the messages even if cached copies are fresh
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LookupQuery {
    /// Requested language
    #[serde(default)]
    pub lang: Option<String>,
    /// Bypass both cache layers
    #[serde(default)]
    pub force: bool,
}

impl LookupQuery {
    /// Returns the requested language, ignoring blank values.
    pub fn language(&self) -> Option<&str> {
        self.lang
            .as_deref()
            .map(str::trim)
            .filter(|lang| !lang.is_empty())
    }
}
