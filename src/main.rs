//! CLI entry point for termfolio.

mod app;
mod cli;

use clap::Parser;
use std::io::{self, IsTerminal};
use termfolio::config::{load_config, normalize_config};
use termfolio::dispatch::Dispatcher;
use termfolio::logging::init_logging;
use tokio::io::BufReader;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();

    if let Err(e) = init_logging(args.log_file.as_deref()) {
        eprintln!("warning: failed to open log file: {e}");
    }

    // Load config.
    let loaded = match load_config(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    let mut config = loaded.config;

    // Apply CLI overrides.
    args.apply_overrides(&mut config);
    if let Err(e) = normalize_config(&mut config) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }

    let dispatcher = Dispatcher::from_config(&config);
    let mut stdout = io::stdout();

    let result = if let Some(command) = args.command.as_deref() {
        app::line_mode::run_one_shot(&dispatcher, command, &mut stdout).await
    } else if io::stdin().is_terminal() && stdout.is_terminal() {
        tokio::task::block_in_place(|| app::interactive::run(&config, dispatcher))
    } else {
        let stdin = BufReader::new(tokio::io::stdin());
        app::line_mode::run_lines(&dispatcher, &config.profile.prompt, stdin, &mut stdout).await
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
