//! Termfolio: a terminal-styled personal portfolio.
//!
//! Visitors type commands at a shell-like prompt and get answers typed back
//! character by character. Answers come from a local query service when it is
//! reachable and from a built-in table of portfolio texts otherwise.
//!
//! # Quick start
//!
//! ```no_run
//! use termfolio::config::load_config;
//! use termfolio::dispatch::{Dispatcher, Resolution};
//!
//! # async fn example() {
//! let loaded = load_config(None).unwrap();
//! let dispatcher = Dispatcher::from_config(&loaded.config);
//! if let Some(Resolution::Respond(response)) = dispatcher.resolve("skills").await {
//!     println!("{}", response.text);
//! }
//! # }
//! ```

pub mod api;
pub mod clock;
pub mod config;
pub mod content;
pub mod dispatch;
pub mod error;
pub mod history;
pub mod logging;
pub mod session;
pub mod tui;
pub mod typing;
