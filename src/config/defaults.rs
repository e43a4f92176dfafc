//! Default configuration constants.
//!
//! Keeping defaults in one module lets the config types, the content table,
//! and tests share the same literals.

/// Owner name shown in the welcome greeting.
pub(super) const DEFAULT_OWNER_NAME: &str = "Neema Mwende";
/// Letters drawn by the splash screen.
pub(super) const DEFAULT_SPLASH_TEXT: &str = "NEEMA";
/// Prompt printed in front of every command.
pub(super) const DEFAULT_PROMPT: &str = "neema@portfolio:~$ ";
/// Local query service endpoint.
pub(super) const DEFAULT_QUERY_URL: &str = "http://localhost:8000/query";
/// Timeout for one query request.
pub(super) const DEFAULT_QUERY_TIMEOUT_SECS: u64 = 10;
/// Per-character delay for the echoed command.
pub(super) const DEFAULT_COMMAND_CHAR_MS: u64 = 30;
/// Per-character delay for response text.
pub(super) const DEFAULT_OUTPUT_CHAR_MS: u64 = 10;
/// How long the splash screen stays up.
pub(super) const DEFAULT_SPLASH_MS: u64 = 1000;

/// Local config file name, also used under the global config directory.
pub(super) const CONFIG_FILE_NAME: &str = "termfolio.toml";
/// Directory name under `$XDG_CONFIG_HOME`.
pub(super) const CONFIG_DIR_NAME: &str = "termfolio";
