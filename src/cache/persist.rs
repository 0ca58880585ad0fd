//! Persistent Store Module
//!
//! On-disk layer: one `<domain>_<language>.json` file per message set holding
//! the last downloaded response verbatim. Staleness comes from the file's
//! modification time.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::cache::clock::{is_outdated, Clock};
use crate::cache::{CacheStats, MessageSet};
use crate::error::{IntuitionError, Result};
use crate::fetch::MessageFetcher;

// == Response Document ==
/// Shape of a message service response.
#[derive(Debug, Deserialize)]
struct ResponseDocument {
    #[serde(default)]
    messages: Value,
    #[serde(default)]
    error: Option<Value>,
}

// == Persistent Store ==
/// File-backed message cache that downloads on demand.
pub struct PersistentStore {
    /// Directory holding the message files
    translation_path: PathBuf,
    /// Age after which a file is downloaded again
    cache_time: Duration,
    /// Network source of message documents
    fetcher: Box<dyn MessageFetcher>,
    /// Time source for staleness checks
    clock: Arc<dyn Clock>,
    /// Disk reads and downloads
    stats: CacheStats,
}

impl PersistentStore {
    // == Constructor ==
    /// Creates a store rooted at `translation_path`, creating the directory if absent.
    ///
    /// The directory is not checked again on later requests.
    pub fn new(
        translation_path: impl Into<PathBuf>,
        cache_time: Duration,
        fetcher: Box<dyn MessageFetcher>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let translation_path = translation_path.into();
        if !translation_path.exists() {
            fs::create_dir_all(&translation_path)?;
            info!("Created translation directory {}", translation_path.display());
        }

        Ok(Self {
            translation_path,
            cache_time,
            fetcher,
            clock,
            stats: CacheStats::new(),
        })
    }

    // == Load ==
    /// Returns the messages of `domain` in `language`.
    ///
    /// The file is downloaded again if `force_download` is set, if it does not
    /// exist or if it is stale. A file that cannot be parsed is treated as
    /// missing: it is downloaded once more, and only a second unparseable
    /// document fails with `CorruptCache`.
    pub fn load(&mut self, domain: &str, language: &str, force_download: bool) -> Result<MessageSet> {
        let path = self.domain_path(domain, language)?;

        let mut downloaded = false;
        if force_download || self.needs_download(&path)? {
            self.download(domain, language, &path)?;
            downloaded = true;
        }

        match self.read_messages(domain, &path) {
            Err(IntuitionError::CorruptCache(reason)) if !downloaded => {
                warn!(
                    "Discarding unreadable message file {}: {}",
                    path.display(),
                    reason
                );
                self.download(domain, language, &path)?;
                self.read_messages(domain, &path)
            }
            result => result,
        }
    }

    // == Domain Path ==
    /// Returns `<translation_path>/<domain>_<language>.json`.
    ///
    /// Fails with `Configuration` if either part could leave the translation
    /// directory.
    pub fn domain_path(&self, domain: &str, language: &str) -> Result<PathBuf> {
        check_path_segment("domain", domain)?;
        check_path_segment("language", language)?;
        Ok(self
            .translation_path
            .join(format!("{}_{}.json", domain, language)))
    }

    // == Staleness ==
    /// Checks whether the file at `path` has outlived the cache time.
    pub fn is_file_outdated(&self, path: &Path) -> Result<bool> {
        let modified: DateTime<Utc> = fs::metadata(path)?.modified()?.into();
        Ok(is_outdated(modified, self.clock.now(), self.cache_time))
    }

    pub fn translation_path(&self) -> &Path {
        &self.translation_path
    }

    /// Returns the disk read and download counters.
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    fn needs_download(&self, path: &Path) -> Result<bool> {
        match self.is_file_outdated(path) {
            Ok(outdated) => Ok(outdated),
            Err(IntuitionError::Io(e)) if e.kind() == io::ErrorKind::NotFound => Ok(true),
            Err(e) => Err(e),
        }
    }

    /// Writes the downloaded document next to `path` and renames it into
    /// place so readers never see a partial file.
    fn download(&mut self, domain: &str, language: &str, path: &Path) -> Result<()> {
        info!("Downloading messages for domain '{}' ({})", domain, language);
        let payload = self.fetcher.fetch(domain, language)?;
        self.stats.record_download();

        let mut file = NamedTempFile::new_in(&self.translation_path)?;
        file.write_all(&payload)?;
        file.flush()?;
        file.persist(path).map_err(|e| IntuitionError::Io(e.error))?;

        debug!("Stored {} bytes in {}", payload.len(), path.display());
        Ok(())
    }

    fn read_messages(&mut self, domain: &str, path: &Path) -> Result<MessageSet> {
        let raw = fs::read(path)?;
        self.stats.record_disk_load();
        debug!("Read message file {}", path.display());
        parse_document(domain, &raw)
    }
}

// == Path Checks ==
/// Rejects names that are empty or could escape the translation directory.
fn check_path_segment(kind: &str, value: &str) -> Result<()> {
    let unsafe_name = value.is_empty()
        || value.contains(['/', '\\', '\0'])
        || value.contains("..");
    if unsafe_name {
        return Err(IntuitionError::Configuration(format!(
            "Invalid {}: {:?}",
            kind, value
        )));
    }
    Ok(())
}

// == Parsing ==
/// Extracts `messages[domain]` from a raw response document.
///
/// An `error` field wins over any messages and becomes `Remote`. A missing,
/// empty or non-object message set is `InvalidDomain`.
pub fn parse_document(domain: &str, raw: &[u8]) -> Result<MessageSet> {
    let document: ResponseDocument =
        serde_json::from_slice(raw).map_err(|e| IntuitionError::CorruptCache(e.to_string()))?;

    if let Some(error) = document.error {
        let message = match error {
            Value::String(message) => message,
            other => other.to_string(),
        };
        return Err(IntuitionError::Remote(message));
    }

    let messages = match document.messages.get(domain) {
        Some(value) if value.is_object() => MessageSet::deserialize(value)
            .map_err(|e| IntuitionError::CorruptCache(e.to_string()))?,
        _ => MessageSet::new(),
    };

    if messages.is_empty() {
        return Err(IntuitionError::InvalidDomain(domain.to_string()));
    }

    Ok(messages)
}
