//! Character-by-character reveal used for the typing effect.
//!
//! A [`Typewriter`] is a chained per-character timer expressed as pure state:
//! the caller feeds it elapsed time and reads back the revealed prefix. Keeping
//! the clock outside makes the animation deterministic under test.

use std::time::Duration;

/// Progressive reveal of one string at a fixed per-character delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    text: String,
    /// Byte offset just past each character, so reveals never split UTF-8.
    char_ends: Vec<usize>,
    revealed: usize,
    per_char: Duration,
    carry: Duration,
}

impl Typewriter {
    /// Start revealing `text`. The first character shows immediately and
    /// each following one after `per_char`; a zero delay reveals everything.
    pub fn new(text: impl Into<String>, per_char: Duration) -> Self {
        let text = text.into();
        let char_ends = text
            .char_indices()
            .map(|(idx, ch)| idx + ch.len_utf8())
            .collect::<Vec<_>>();
        let revealed = if per_char.is_zero() {
            char_ends.len()
        } else {
            char_ends.len().min(1)
        };
        Self {
            text,
            char_ends,
            revealed,
            per_char,
            carry: Duration::ZERO,
        }
    }

    /// Account for `elapsed` wall time and return how many characters were
    /// newly revealed.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        if self.is_done() {
            return 0;
        }
        self.carry += elapsed;
        let before = self.revealed;
        while !self.is_done() && self.carry >= self.per_char {
            self.carry -= self.per_char;
            self.revealed += 1;
        }
        self.revealed - before
    }

    /// Currently visible prefix.
    pub fn revealed(&self) -> &str {
        match self.revealed {
            0 => "",
            n => &self.text[..self.char_ends[n - 1]],
        }
    }

    pub fn is_done(&self) -> bool {
        self.revealed >= self.char_ends.len()
    }
}
