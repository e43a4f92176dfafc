//! Command dispatch: local `clear`, remote query, static fallback.
//!
//! Backend failures never reach the visitor. Any transport error, non-2xx
//! status or malformed body is logged and replaced by the fallback table's
//! answer for the same command.

use crate::api::{HttpQueryClient, QueryBackend};
use crate::config::Config;
use crate::content::{self, FallbackTable};
use std::sync::Arc;

/// Where a response text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseSource {
    Remote,
    Fallback,
}

/// Text to type out for one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub text: String,
    pub is_ai: bool,
    pub source: ResponseSource,
}

/// What a submitted line resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Reserved `clear`: empty the history, no request, no animation.
    Clear,
    Respond(Response),
}

/// Resolves commands against the query backend and the fallback table.
#[derive(Clone)]
pub struct Dispatcher {
    table: Arc<FallbackTable>,
    backend: Option<Arc<dyn QueryBackend>>,
}

impl Dispatcher {
    /// `backend = None` answers every command from the table.
    pub fn new(table: FallbackTable, backend: Option<Arc<dyn QueryBackend>>) -> Self {
        Self {
            table: Arc::new(table),
            backend,
        }
    }

    /// Table from the built-in texts plus `[responses]` overrides, and an
    /// HTTP backend unless `backend.enabled` is false.
    pub fn from_config(config: &Config) -> Self {
        let table = FallbackTable::builtin(&config.profile.name).with_overrides(&config.responses);
        let backend = config
            .backend
            .enabled
            .then(|| Arc::new(HttpQueryClient::new(&config.backend)) as Arc<dyn QueryBackend>);
        Self::new(table, backend)
    }

    /// Resolve one submitted line. Returns `None` for blank input.
    pub async fn resolve(&self, line: &str) -> Option<Resolution> {
        let command = line.trim();
        if command.is_empty() {
            return None;
        }
        if content::is_clear(command) {
            return Some(Resolution::Clear);
        }
        Some(Resolution::Respond(self.respond(command).await))
    }

    /// Ask the backend, falling back to the static table on any failure.
    pub async fn respond(&self, command: &str) -> Response {
        let Some(backend) = self.backend.as_ref() else {
            return self.fallback(command);
        };
        match backend.query(command).await {
            Ok(answer) => {
                tracing::debug!(command, is_ai = answer.is_ai, "backend answered");
                Response {
                    text: answer.response,
                    is_ai: answer.is_ai,
                    source: ResponseSource::Remote,
                }
            }
            Err(err) => {
                tracing::warn!(command, error = %err, "query backend failed; using fallback");
                self.fallback(command)
            }
        }
    }

    /// Static answer for `command` without touching the network.
    pub fn fallback(&self, command: &str) -> Response {
        Response {
            text: self.table.respond(command),
            is_ai: false,
            source: ResponseSource::Fallback,
        }
    }
}
