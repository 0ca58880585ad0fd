//! Error types for message lookup
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Intuition Error Enum ==
/// Unified error type for message lookup and caching.
#[derive(Error, Debug)]
pub enum IntuitionError {
    /// No domain was given and no default domain is configured
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Key not present in the message set, even after an optional refresh
    #[error("No message for key '{key}' in domain '{domain}'")]
    Lookup { key: String, domain: String },

    /// The remote service has no messages for the domain
    #[error("Illegal domain given: {0}")]
    InvalidDomain(String),

    /// The remote service answered with an error payload
    #[error("Remote error: {0}")]
    Remote(String),

    /// Network-level failure while downloading messages
    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// Persisted message file could not be parsed
    #[error("Corrupt message file: {0}")]
    CorruptCache(String),

    /// Local filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The process-wide default instance was used before `init`
    #[error("Default instance not initialized")]
    NotInitialized,

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for IntuitionError {
    fn into_response(self) -> Response {
        let status = match &self {
            IntuitionError::Lookup { .. } | IntuitionError::InvalidDomain(_) => {
                StatusCode::NOT_FOUND
            }
            IntuitionError::Configuration(_) => StatusCode::BAD_REQUEST,
            IntuitionError::Remote(_) | IntuitionError::Fetch(_) => StatusCode::BAD_GATEWAY,
            IntuitionError::CorruptCache(_)
            | IntuitionError::Io(_)
            | IntuitionError::NotInitialized
            | IntuitionError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for message lookup.
pub type Result<T> = std::result::Result<T, IntuitionError>;
