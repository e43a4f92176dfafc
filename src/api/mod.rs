//! HTTP client for the portfolio query service.
//!
//! The service answers `POST /query` with `{command}` in and
//! `{response, is_ai}` out. Nothing else about it is assumed.

use crate::error::ApiError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

mod client;

pub use client::HttpQueryClient;

/// Request body sent to the query service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryRequest {
    pub command: String,
}

/// Successful query service answer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QueryResponse {
    pub response: String,
    /// True when the answer was generated by the AI responder rather than
    /// a static table on the server side.
    #[serde(default)]
    pub is_ai: bool,
}

/// Minimal query interface used by the dispatcher.
///
/// Tests provide deterministic doubles without network calls while the
/// production path uses [`HttpQueryClient`].
#[async_trait]
pub trait QueryBackend: Send + Sync {
    async fn query(&self, command: &str) -> Result<QueryResponse, ApiError>;
}
