//! CLI argument parsing via clap.

use clap::Parser;
use std::path::PathBuf;
use termfolio::config::Config;

/// A terminal-styled personal portfolio.
#[derive(Debug, Parser)]
#[command(name = "termfolio", version)]
pub struct Args {
    /// Command to answer. If provided, prints its response and exits.
    pub command: Option<String>,

    /// Path to config file (default: ./termfolio.toml or ~/.config/termfolio/termfolio.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Override the query service URL.
    #[arg(long = "query-url", conflicts_with = "offline")]
    pub query_url: Option<String>,

    /// Never contact the query service; answer from built-in texts only.
    #[arg(long = "offline")]
    pub offline: bool,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Skip the splash screen.
    #[arg(long = "no-splash")]
    pub no_splash: bool,

    /// Append diagnostic logs to this file (filter with TERMFOLIO_LOG).
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Apply flag overrides on top of file and environment values.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(url) = &self.query_url {
            config.backend.query_url = url.clone();
        }
        if self.offline {
            config.backend.enabled = false;
        }
        if self.no_color {
            config.display.color = false;
        }
        if self.no_splash {
            config.display.splash = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;
    use termfolio::config::Config;

    fn env_resolved_config() -> Config {
        let mut config = Config::default();
        config.backend.query_url = "http://from-env:9000/query".to_string();
        config
    }

    #[test]
    fn positional_command_selects_one_shot() {
        let args = Args::parse_from(["termfolio", "skills"]);
        assert_eq!(args.command.as_deref(), Some("skills"));
        assert!(!args.offline);
    }

    #[test]
    fn flags_parse() {
        let args = Args::parse_from([
            "termfolio",
            "-c",
            "custom.toml",
            "--no-color",
            "--no-splash",
            "--log-file",
            "/tmp/termfolio.log",
        ]);
        assert_eq!(args.config.as_deref(), Some("custom.toml"));
        assert!(args.no_color);
        assert!(args.no_splash);
        assert_eq!(
            args.log_file.as_deref(),
            Some(std::path::Path::new("/tmp/termfolio.log"))
        );
        assert!(args.command.is_none());
    }

    #[test]
    fn offline_conflicts_with_query_url() {
        let result = Args::try_parse_from([
            "termfolio",
            "--offline",
            "--query-url",
            "http://localhost:9000/query",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn query_url_flag_beats_environment() {
        let mut config = env_resolved_config();
        Args::parse_from(["termfolio", "--query-url", "http://from-cli:7000/query"])
            .apply_overrides(&mut config);
        assert_eq!(config.backend.query_url, "http://from-cli:7000/query");
        assert!(config.backend.enabled);
    }

    #[test]
    fn no_flags_keep_resolved_values() {
        let mut config = env_resolved_config();
        Args::parse_from(["termfolio"]).apply_overrides(&mut config);
        assert_eq!(config.backend.query_url, "http://from-env:9000/query");
        assert!(config.backend.enabled);
        assert!(config.display.color);
        assert!(config.display.splash);
    }

    #[test]
    fn offline_disables_backend_and_display_flags_apply() {
        let mut config = env_resolved_config();
        Args::parse_from(["termfolio", "--offline", "--no-color", "--no-splash"])
            .apply_overrides(&mut config);
        assert!(!config.backend.enabled);
        assert!(!config.display.color);
        assert!(!config.display.splash);
        assert_eq!(config.backend.query_url, "http://from-env:9000/query");
    }
}
