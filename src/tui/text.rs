//! Text measuring and wrapping used by frame layout.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Terminal cells occupied by `s` (wide glyphs such as emoji count two).
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

/// Clip a string to at most `max_width` terminal cells. A wide glyph that
/// would straddle the limit is dropped whole.
pub fn clip_to_width(s: &str, max_width: usize) -> String {
    let mut used = 0usize;
    let mut out = String::new();
    for ch in s.chars() {
        let width = char_width(ch);
        if used + width > max_width {
            break;
        }
        used += width;
        out.push(ch);
    }
    out
}

/// Pad `s` with spaces on the right up to `width` terminal cells.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let mut out = s.to_string();
    let used = visible_width(s);
    if used < width {
        out.extend(std::iter::repeat(' ').take(width - used));
    }
    out
}

/// Wrap multi-line text; every source line yields at least one row.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    // `split('\n')` keeps a trailing empty line, which `lines()` would drop
    // while a response is still being typed.
    for line in text.split('\n') {
        rows.extend(wrap_line(line.trim_end_matches('\r'), max_width));
    }
    rows
}

/// Wrap a single line to fit `max_width` terminal cells.
///
/// Prefers whitespace boundaries and falls back to hard wrapping long words.
/// Leading indentation on the first row is preserved.
pub fn wrap_line(line: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return Vec::new();
    }
    if line.is_empty() {
        return vec![String::new()];
    }

    let chars: Vec<char> = line.chars().collect();
    let mut out = Vec::new();
    let mut start = 0usize;

    while start < chars.len() {
        let end = fit_end(&chars, start, max_width);
        if end == chars.len() {
            out.push(chars[start..end].iter().collect());
            break;
        }
        if chars[end].is_whitespace() {
            out.push(chars[start..end].iter().collect());
            start = skip_whitespace(&chars, end);
            continue;
        }

        match (start + 1..end).rev().find(|idx| chars[*idx].is_whitespace()) {
            Some(split_idx) => {
                out.push(chars[start..split_idx].iter().collect());
                start = skip_whitespace(&chars, split_idx);
            }
            None => {
                out.push(chars[start..end].iter().collect());
                start = end;
            }
        }
    }

    if out.is_empty() {
        out.push(String::new());
    }
    out
}

/// Index just past the longest run from `start` that fits `max_width`
/// cells. Always advances at least one character.
fn fit_end(chars: &[char], start: usize, max_width: usize) -> usize {
    let mut used = 0usize;
    let mut idx = start;
    while idx < chars.len() {
        let width = char_width(chars[idx]);
        if used + width > max_width {
            break;
        }
        used += width;
        idx += 1;
    }
    idx.max(start + 1)
}

fn skip_whitespace(chars: &[char], mut idx: usize) -> usize {
    while idx < chars.len() && chars[idx].is_whitespace() {
        idx += 1;
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_line_prefers_word_boundaries() {
        assert_eq!(wrap_line("one two three", 7), vec!["one two", "three"]);
    }

    #[test]
    fn wrap_line_falls_back_to_hard_wrap() {
        assert_eq!(wrap_line("superlongtoken", 5), vec!["super", "longt", "oken"]);
    }

    #[test]
    fn wrap_line_keeps_leading_indent() {
        assert_eq!(wrap_line("   Tech: Rust", 20), vec!["   Tech: Rust"]);
    }

    #[test]
    fn wrap_text_keeps_blank_and_trailing_lines() {
        assert_eq!(wrap_text("a\n\nb\n", 10), vec!["a", "", "b", ""]);
    }

    #[test]
    fn pad_and_clip_count_cells() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("abcdef", 4), "abcdef");
        assert_eq!(clip_to_width("•••", 2), "••");
        assert_eq!(visible_width("██ █"), 4);
    }

    #[test]
    fn emoji_take_two_cells() {
        assert_eq!(visible_width("🔹 AI"), 5);
        assert_eq!(clip_to_width("🔹🔹x", 3), "🔹");
        assert_eq!(pad_to_width("🎓", 4), "🎓  ");
    }

    #[test]
    fn wrap_line_measures_wide_glyphs() {
        let rows = wrap_line("🔹 AI-Powered Portfolio", 12);
        assert_eq!(rows, vec!["🔹", "AI-Powered", "Portfolio"]);
        assert!(rows.iter().all(|row| visible_width(row) <= 12));
    }
}
