//! Terminal user-interface building blocks.
//!
//! Key decoding and screen-mode lifetime live in `input`, layout and painting
//! in `renderer`, and the splash font in `splash`. Stateful command handling
//! stays in [`crate::session`] so layout can be tested without a terminal.

pub mod input;
pub mod renderer;
pub mod settings;
pub mod splash;
pub mod text;

pub use input::{action_for_key, ScreenGuard};
pub use renderer::{layout_frame, layout_splash, Renderer, Row, Span, Tone, ViewState};
