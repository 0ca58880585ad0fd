//! API Handlers
//!
//! HTTP request handlers for each lookup endpoint.

use std::sync::Arc;
use tokio::sync::Mutex;

use axum::{
    extract::{Path, Query, State},
    http::{header::COOKIE, HeaderMap},
    Json,
};

use crate::cache::MessageCache;
use crate::error::{IntuitionError, Result};
use crate::lang;
use crate::models::{
    DomainMessagesResponse, HealthResponse, LookupQuery, MessageResponse, StatsResponse,
};

/// Application state shared across all handlers.
///
/// Cache access runs on the blocking pool since lookups may hit the disk
/// and the network. The mutex covers the whole check-then-fetch sequence,
/// so one (domain, language) pair is never downloaded twice concurrently.
#[derive(Clone)]
pub struct AppState {
    /// Shared message cache
    pub cache: Arc<Mutex<MessageCache>>,
    /// Language used when neither query nor cookie names one
    pub default_language: String,
}

impl AppState {
    /// Creates a new AppState around the given cache.
    pub fn new(cache: MessageCache) -> Self {
        let default_language = cache.default_language().to_string();
        Self {
            cache: Arc::new(Mutex::new(cache)),
            default_language,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds a blocking HTTP client; call from a blocking context.
    pub fn from_config(config: &crate::config::Config) -> Result<Self> {
        Ok(Self::new(MessageCache::from_config(config)?))
    }

    /// Picks the language for a request: `lang` query parameter, then the
    /// `TsIntuition_userlang` cookie, then the default.
    fn request_language(&self, query: &LookupQuery, headers: &HeaderMap) -> String {
        if let Some(language) = query.language() {
            return language.to_string();
        }
        let cookies = headers.get(COOKIE).and_then(|value| value.to_str().ok());
        lang::resolve_language(cookies, &self.default_language)
    }

    /// Runs `f` against the cache on the blocking pool.
    async fn with_cache<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut MessageCache) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let cache = self.cache.clone();
        tokio::task::spawn_blocking(move || {
            let mut cache = cache.blocking_lock();
            f(&mut cache)
        })
        .await
        .map_err(|e| IntuitionError::Internal(e.to_string()))?
    }
}

/// Handler for GET /msg/:domain/:key
///
/// Looks up one message in the given domain.
pub async fn lookup_handler(
    State(state): State<AppState>,
    Path((domain, key)): Path<(String, String)>,
    Query(query): Query<LookupQuery>,
    headers: HeaderMap,
) -> Result<Json<MessageResponse>> {
    let language = state.request_language(&query, &headers);

    let (domain, key, language, message) = state
        .with_cache(move |cache| {
            if query.force {
                cache.get_domain_messages(&domain, &language, true)?;
            }
            let message = cache.get(&key, Some(&domain), Some(&language))?;
            Ok((domain, key, language, message))
        })
        .await?;

    Ok(Json(MessageResponse::new(domain, language, key, message)))
}

/// Handler for GET /msg/:key
///
/// Looks up one message in the configured default domain.
pub async fn lookup_default_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Query(query): Query<LookupQuery>,
    headers: HeaderMap,
) -> Result<Json<MessageResponse>> {
    let language = state.request_language(&query, &headers);

    let (domain, key, language, message) = state
        .with_cache(move |cache| {
            let message = cache.get(&key, None, Some(&language))?;
            let domain = cache.default_domain().unwrap_or_default().to_string();
            Ok((domain, key, language, message))
        })
        .await?;

    Ok(Json(MessageResponse::new(domain, language, key, message)))
}

/// Handler for GET /messages/:domain
///
/// Returns the whole message set of a domain.
pub async fn domain_messages_handler(
    State(state): State<AppState>,
    Path(domain): Path<String>,
    Query(query): Query<LookupQuery>,
    headers: HeaderMap,
) -> Result<Json<DomainMessagesResponse>> {
    let language = state.request_language(&query, &headers);

    let (domain, language, messages) = state
        .with_cache(move |cache| {
            let messages = cache
                .get_domain_messages(&domain, &language, query.force)?
                .clone();
            Ok((domain, language, messages))
        })
        .await?;

    Ok(Json(DomainMessagesResponse::new(domain, language, messages)))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.lock().await;
    Json(StatsResponse::from(cache.stats()))
}

/// Handler for GET /health
///
/// Returns server health status.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::SystemClock;
    use crate::config::Config;
    use crate::fetch::fake::FakeFetcher;
    use axum::http::HeaderValue;
    use tempfile::tempdir;

    fn state_with_language(language: &str) -> (AppState, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let config = Config {
            language: language.to_string(),
            translation_path: dir.path().to_path_buf(),
            ..Config::default()
        };
        let cache = MessageCache::new(
            &config,
            Box::new(FakeFetcher::default()),
            Arc::new(SystemClock),
        )
        .unwrap();
        (AppState::new(cache), dir)
    }

    #[test]
    fn test_request_language_precedence() {
        let (state, _dir) = state_with_language("en");
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("TsIntuition_userlang=de"));

        let from_query = LookupQuery {
            lang: Some("fr".to_string()),
            force: false,
        };
        assert_eq!(state.request_language(&from_query, &headers), "fr");
        assert_eq!(state.request_language(&LookupQuery::default(), &headers), "de");
        assert_eq!(
            state.request_language(&LookupQuery::default(), &HeaderMap::new()),
            "en"
        );
    }
}
