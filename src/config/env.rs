//! Environment variable overrides.
//!
//! `TERMFOLIO_*` variables override values resolved from the config file.

use crate::error::ConfigError;

use super::Config;

pub(super) const ENV_QUERY_URL: &str = "TERMFOLIO_QUERY_URL";
pub(super) const ENV_QUERY_TIMEOUT_SECS: &str = "TERMFOLIO_QUERY_TIMEOUT_SECS";

pub(super) fn apply_runtime_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(url) = env_lookup(ENV_QUERY_URL) {
        config.backend.query_url = url;
    }
    if let Some(timeout) = env_lookup(ENV_QUERY_TIMEOUT_SECS) {
        let parsed = timeout.trim().parse::<u64>().map_err(|_| {
            ConfigError::Invalid(format!(
                "invalid {ENV_QUERY_TIMEOUT_SECS} value `{timeout}`: expected positive integer seconds"
            ))
        })?;
        config.backend.timeout_secs = parsed;
    }
    Ok(())
}
