//! API Module
//!
//! HTTP handlers and routing for the message lookup API.
//!
//! # Endpoints
//! - `GET /msg/:key` - Look up a message in the default domain
//! - `GET /msg/:domain/:key` - Look up a message in a domain
//! - `GET /messages/:domain` - Get a domain's whole message set
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
