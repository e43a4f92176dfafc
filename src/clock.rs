//! Wall-clock line shown under the terminal.

use chrono::{DateTime, Local, TimeZone};
use std::time::{Duration, Instant};

/// Display format for the clock line.
pub const CLOCK_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// How often the clock text is refreshed.
pub const CLOCK_TICK: Duration = Duration::from_secs(1);

/// Format a timestamp the way the clock line shows it.
pub fn format_clock<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format(CLOCK_FORMAT).to_string()
}

/// Clock text refreshed at most once per [`CLOCK_TICK`].
#[derive(Debug, Clone)]
pub struct Clock {
    text: String,
    refreshed_at: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            text: format_clock(&Local::now()),
            refreshed_at: Instant::now(),
        }
    }

    /// Refresh the text if a tick has passed. Returns true when it changed.
    pub fn refresh(&mut self, now: Instant) -> bool {
        if now.duration_since(self.refreshed_at) < CLOCK_TICK {
            return false;
        }
        self.refreshed_at = now;
        let text = format_clock(&Local::now());
        let changed = text != self.text;
        self.text = text;
        changed
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
