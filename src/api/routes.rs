//! API Routes
//!
//! Configures the Axum router with all lookup endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    domain_messages_handler, health_handler, lookup_default_handler, lookup_handler,
    stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /msg/:key` - Look up a message in the default domain
/// - `GET /msg/:domain/:key` - Look up a message in a domain
/// - `GET /messages/:domain` - Get a domain's whole message set
/// - `GET /stats` - Get cache statistics
/// - `GET /health` - Health check endpoint
///
/// All lookup endpoints accept `?lang=` and `?force=true`.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/msg/:key", get(lookup_default_handler))
        .route("/msg/:domain/:key", get(lookup_handler))
        .route("/messages/:domain", get(domain_messages_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{MessageCache, SystemClock};
    use crate::config::Config;
    use crate::fetch::fake::FakeFetcher;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use std::sync::Arc;
    use tempfile::{tempdir, TempDir};
    use tower::util::ServiceExt;

    fn create_test_app() -> (Router, TempDir) {
        let dir = tempdir().unwrap();
        let config = Config {
            translation_path: dir.path().to_path_buf(),
            ..Config::default()
        };
        let fetcher = FakeFetcher::with_payload("tool", r#"{"messages": {"tool": {"title": "Title"}}}"#);
        let cache = MessageCache::new(&config, Box::new(fetcher), Arc::new(SystemClock)).unwrap();
        (create_router(AppState::new(cache)), dir)
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (app, _dir) = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_stats_endpoint() {
        let (app, _dir) = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/stats").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_lookup_endpoint() {
        let (app, _dir) = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/msg/tool/title")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_lookup_without_default_domain() {
        let (app, _dir) = create_test_app();

        let response = app
            .oneshot(Request::builder().uri("/msg/title").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
