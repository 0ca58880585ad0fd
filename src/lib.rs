//! Intuition - Localized message lookup
//!
//! Looks up translated messages by key, domain and language. Message sets are
//! downloaded from the Intuition service on demand and cached in memory and
//! on disk, each layer with its own expiry.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod fetch;
pub mod global;
pub mod lang;
pub mod models;

pub use api::AppState;
pub use cache::{MessageCache, MessageSet, PersistentStore};
pub use config::Config;
pub use error::{IntuitionError, Result};
pub use global::{get, init, install};
