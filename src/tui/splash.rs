//! Splash screen: the owner's name drawn in five-row block letters.

use super::settings;
use super::text::{pad_to_width, visible_width};

/// Rows in every glyph.
pub const GLYPH_ROWS: usize = 5;
/// Width of the blank cell drawn for characters without a glyph.
const MISSING_GLYPH_WIDTH: usize = 3;

/// Block-letter rows for `ch`, or `None` when the font has no glyph.
pub fn glyph(ch: char) -> Option<[&'static str; GLYPH_ROWS]> {
    let rows = match ch.to_ascii_uppercase() {
        'A' => [" ███ ", "██ ██", "█████", "██ ██", "██ ██"],
        'B' => ["████ ", "██ ██", "████ ", "██ ██", "████ "],
        'C' => [" ████", "██   ", "██   ", "██   ", " ████"],
        'D' => ["████ ", "██ ██", "██ ██", "██ ██", "████ "],
        'E' => ["██████", "██", "████", "██", "██████"],
        'F' => ["██████", "██", "████", "██", "██"],
        'G' => [" ████ ", "██    ", "██ ███", "██  ██", " ████ "],
        'H' => ["██  ██", "██  ██", "██████", "██  ██", "██  ██"],
        'I' => ["██████", "  ██", "  ██", "  ██", "██████"],
        'J' => ["  ████", "    ██", "    ██", "██  ██", " ████ "],
        'K' => ["██  ██", "██ ██", "████", "██ ██", "██  ██"],
        'L' => ["██", "██", "██", "██", "██████"],
        'M' => ["██   ██", "███ ███", "██ █ ██", "██   ██", "██   ██"],
        'N' => ["██   ██", "███  ██", "██ █ ██", "██  ███", "██   ██"],
        'O' => [" ████ ", "██  ██", "██  ██", "██  ██", " ████ "],
        'P' => ["█████ ", "██  ██", "█████ ", "██", "██"],
        'Q' => [" ████ ", "██  ██", "██  ██", "██ ██ ", " ██ ██"],
        'R' => ["█████ ", "██  ██", "█████ ", "██ ██ ", "██  ██"],
        'S' => [" █████", "██", " ████ ", "    ██", "█████ "],
        'T' => ["██████", "  ██", "  ██", "  ██", "  ██"],
        'U' => ["██  ██", "██  ██", "██  ██", "██  ██", " ████ "],
        'V' => ["██  ██", "██  ██", "██  ██", " ████ ", "  ██"],
        'W' => ["██   ██", "██   ██", "██ █ ██", "███ ███", "██   ██"],
        'X' => ["██  ██", " ████ ", "  ██", " ████ ", "██  ██"],
        'Y' => ["██  ██", " ████ ", "  ██", "  ██", "  ██"],
        'Z' => ["██████", "   ██", "  ██", " ██", "██████"],
        _ => return None,
    };
    Some(rows)
}

/// Lay `text` out as [`GLYPH_ROWS`] rows of block letters.
///
/// Each glyph is padded to its widest row so letters line up; characters
/// without a glyph (spaces included) leave a blank cell.
pub fn splash_rows(text: &str) -> Vec<String> {
    let cells: Vec<Vec<String>> = text
        .chars()
        .map(|ch| match glyph(ch) {
            Some(rows) => {
                let width = rows.iter().map(|row| visible_width(row)).max().unwrap_or(0);
                rows.iter().map(|row| pad_to_width(row, width)).collect()
            }
            None => vec![" ".repeat(MISSING_GLYPH_WIDTH); GLYPH_ROWS],
        })
        .collect();

    (0..GLYPH_ROWS)
        .map(|row| {
            cells
                .iter()
                .map(|cell| cell[row].as_str())
                .collect::<Vec<_>>()
                .join(settings::SPLASH_GAP)
                .trim_end()
                .to_string()
        })
        .collect()
}
