//! Centralized, hardcoded UI settings for the terminal interface.
//!
//! This is the single place to tweak glyphs, colors, and frame timing.

use crossterm::style::Color;

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

pub const HEADER_SEPARATOR: &str = " | ";
pub const RULE_GLYPH: char = '─';
/// Left padding for history and input rows.
pub const BODY_INDENT: &str = "  ";
/// Terminal size assumed when the real size cannot be read.
pub const FALLBACK_COLUMNS: u16 = 100;
pub const FALLBACK_ROWS: u16 = 30;

// ---------------------------------------------------------------------------
// Glyphs / labels
// ---------------------------------------------------------------------------

pub const CARET_GLYPH: &str = "█";
pub const AI_TAG: &str = "[ai]";
pub const AWAITING_LABEL: &str = "thinking";
pub const SPINNER_FRAMES: [char; 4] = ['|', '/', '-', '\\'];
/// Blank columns between splash glyphs.
pub const SPLASH_GAP: &str = "  ";

// ---------------------------------------------------------------------------
// Timing
// ---------------------------------------------------------------------------

/// Event poll timeout; also the animation frame period.
pub const FRAME_POLL_MS: u64 = 8;
pub const CARET_BLINK_MS: u64 = 530;
pub const SPINNER_TICK_MS: u64 = 100;

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

pub const COLOR_PROMPT: Color = Color::Rgb {
    r: 0,
    g: 170,
    b: 255,
};
pub const COLOR_COMMAND: Color = Color::Rgb {
    r: 0,
    g: 255,
    b: 153,
};
pub const COLOR_OUTPUT: Color = Color::White;
pub const COLOR_HEADER: Color = COLOR_COMMAND;
pub const COLOR_RULE: Color = Color::Rgb { r: 0, g: 128, b: 77 };
pub const COLOR_CARET: Color = COLOR_COMMAND;
pub const COLOR_AI_TAG: Color = Color::Magenta;
pub const COLOR_SPINNER: Color = Color::DarkGrey;
pub const COLOR_CLOCK: Color = COLOR_PROMPT;
pub const COLOR_SPLASH: Color = Color::Rgb {
    r: 0,
    g: 255,
    b: 102,
};
