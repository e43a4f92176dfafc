//! Configuration data model.
//!
//! Struct/enum definitions plus default values. Loading and precedence
//! logic lives in `config::mod`.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::defaults::{
    DEFAULT_COMMAND_CHAR_MS, DEFAULT_OUTPUT_CHAR_MS, DEFAULT_OWNER_NAME, DEFAULT_PROMPT,
    DEFAULT_QUERY_TIMEOUT_SECS, DEFAULT_QUERY_URL, DEFAULT_SPLASH_MS, DEFAULT_SPLASH_TEXT,
};

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub profile: ProfileConfig,
    pub backend: BackendConfig,
    pub animation: AnimationConfig,
    pub display: DisplayConfig,
    /// Fallback-table overrides keyed by command name.
    pub responses: BTreeMap<String, String>,
}

/// Who the portfolio belongs to and how the prompt reads.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub name: String,
    /// Text drawn in block letters by the splash screen.
    pub splash_text: String,
    pub prompt: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_OWNER_NAME.to_string(),
            splash_text: DEFAULT_SPLASH_TEXT.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

/// Remote query service settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// When false every command is answered from the fallback table.
    pub enabled: bool,
    pub query_url: String,
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            query_url: DEFAULT_QUERY_URL.to_string(),
            timeout_secs: DEFAULT_QUERY_TIMEOUT_SECS,
        }
    }
}

/// Typing-animation speeds in milliseconds per character.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AnimationConfig {
    pub command_char_ms: u64,
    pub output_char_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            command_char_ms: DEFAULT_COMMAND_CHAR_MS,
            output_char_ms: DEFAULT_OUTPUT_CHAR_MS,
        }
    }
}

/// Display / rendering preferences.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
    pub splash: bool,
    pub splash_ms: u64,
    pub clock: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            splash: true,
            splash_ms: DEFAULT_SPLASH_MS,
            clock: true,
        }
    }
}

/// Where the active configuration text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicit `--config` path.
    Explicit(PathBuf),
    /// `./termfolio.toml` in the working directory.
    Local,
    /// `$XDG_CONFIG_HOME/termfolio/termfolio.toml`.
    Global(PathBuf),
    /// No file found; built-in defaults were used.
    BuiltInDefaults,
}

/// Parsed configuration plus the source it was read from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}
