//! Diagnostic logging setup.
//!
//! The interactive terminal owns stdout/stderr, so logs only go to a file and
//! only when one is requested. Without `--log-file` every tracing call is a
//! no-op.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "TERMFOLIO_LOG";
/// Filter used when [`LOG_ENV_VAR`] is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Install a global subscriber that appends to `path`.
///
/// Does nothing when `path` is `None`. A subscriber installed earlier (for
/// example by a test harness) is left in place.
pub fn init_logging(path: Option<&Path>) -> io::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();
    Ok(())
}
