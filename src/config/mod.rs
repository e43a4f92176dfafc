//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. CLI flags (applied by the binary after loading)
//! 2. Environment variables (`TERMFOLIO_QUERY_URL`, `TERMFOLIO_QUERY_TIMEOUT_SECS`)
//! 3. TOML file specified via --config CLI flag
//! 4. ./termfolio.toml in the current directory
//! 5. $XDG_CONFIG_HOME/termfolio/termfolio.toml (or ~/.config/termfolio/termfolio.toml)
//! 6. Built-in defaults

use crate::error::ConfigError;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

mod defaults;
mod env;
mod types;

use defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
pub use types::{
    AnimationConfig, BackendConfig, Config, ConfigSource, DisplayConfig, LoadedConfig,
    ProfileConfig,
};

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config(path_override: Option<&str>) -> Result<LoadedConfig, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<LoadedConfig, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (config_text, source) =
        read_config_text_with_sources(path_override, &read_file, &config_root)?;
    let mut config: Config = toml::from_str(&config_text)?;
    env::apply_runtime_env_overrides(&mut config, &env_lookup)?;
    normalize_config(&mut config)?;
    tracing::debug!(?source, "configuration loaded");
    Ok(LoadedConfig { config, source })
}

fn read_config_text_with_sources<FRead, FRoot>(
    path_override: Option<&str>,
    read_file: &FRead,
    config_root: &FRoot,
) -> Result<(String, ConfigSource), ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    // An explicit path must exist; the implicit locations are optional.
    if let Some(p) = path_override {
        let path = PathBuf::from(p);
        let text = read_file(&path)?;
        return Ok((text, ConfigSource::Explicit(path)));
    }

    if let Ok(text) = read_file(Path::new(CONFIG_FILE_NAME)) {
        return Ok((text, ConfigSource::Local));
    }
    if let Some(dir) = config_root() {
        let global = dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
        if let Ok(text) = read_file(&global) {
            return Ok((text, ConfigSource::Global(global)));
        }
    }

    Ok((String::new(), ConfigSource::BuiltInDefaults))
}

/// Validate required fields and canonicalize user-supplied values.
pub fn normalize_config(config: &mut Config) -> Result<(), ConfigError> {
    if config.profile.prompt.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "profile.prompt must not be empty".to_string(),
        ));
    }
    let url = config.backend.query_url.trim();
    if url.is_empty() {
        return Err(ConfigError::Invalid(
            "backend.query_url must not be empty".to_string(),
        ));
    }
    config.backend.query_url = url.to_string();
    // Clamp to at least 1 second to avoid "no-timeout" accidental behavior.
    config.backend.timeout_secs = config.backend.timeout_secs.max(1);

    let responses = std::mem::take(&mut config.responses);
    config.responses = responses
        .into_iter()
        .filter_map(|(name, text)| {
            let key = name.trim().to_lowercase();
            (!key.is_empty()).then_some((key, text))
        })
        .collect::<BTreeMap<_, _>>();
    Ok(())
}

/// Resolve the base config directory from env/home conventions.
pub fn config_root_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}
