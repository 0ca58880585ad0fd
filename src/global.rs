//! Process-wide default instance
//!
//! Nothing is created until `init` (or `install`) is called.

use std::sync::{Mutex, MutexGuard};

use tracing::info;

use crate::cache::MessageCache;
use crate::config::Config;
use crate::error::{IntuitionError, Result};
use crate::lang;

static DEFAULT: Mutex<Option<MessageCache>> = Mutex::new(None);

fn default_slot() -> MutexGuard<'static, Option<MessageCache>> {
    DEFAULT.lock().unwrap_or_else(|e| e.into_inner())
}

/// Builds the default instance from `config`, replacing any previous one.
///
/// The default language is taken from the `TsIntuition_userlang` cookie in
/// `HTTP_COOKIE` when present.
pub fn init(mut config: Config) -> Result<()> {
    config.language = lang::ambient_language(&config.language);
    let cache = MessageCache::from_config(&config)?;
    info!(
        "Default instance initialized: domain={:?}, language={}",
        config.domain, config.language
    );
    install(cache);
    Ok(())
}

/// Installs an already built cache as the default instance.
pub fn install(cache: MessageCache) {
    *default_slot() = Some(cache);
}

/// Looks up `key` through the default instance.
pub fn get(key: &str, domain: Option<&str>, language: Option<&str>) -> Result<String> {
    default_slot()
        .as_mut()
        .ok_or(IntuitionError::NotInitialized)?
        .get(key, domain, language)
}
