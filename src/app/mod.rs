//! Binary-local run modes.
//!
//! `main.rs` resolves config and picks a mode; each mode owns its own I/O.

pub(crate) mod interactive;
pub(crate) mod line_mode;
