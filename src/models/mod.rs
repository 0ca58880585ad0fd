//! Request and Response models for the lookup API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::LookupQuery;
pub use responses::{DomainMessagesResponse, HealthResponse, MessageResponse, StatsResponse};
