//! API Client
//!
//! Thin HTTP layer over the store backend: one path family per entity kind
//! and four verbs. No retries, caching or timeouts.

mod client;
mod endpoints;
mod error;

pub use client::ApiClient;
pub use endpoints::Endpoints;
pub use error::{ApiError, ApiResult};

/// Default backend location
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
