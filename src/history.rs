//! Ordered record of prompt/command/output entries shown on screen.

/// One command and its response as currently revealed on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub prompt: String,
    /// Echoed command text, revealed incrementally.
    pub command: String,
    /// Response text, revealed incrementally.
    pub output: String,
    /// True when the response came from the remote AI responder.
    pub is_ai: bool,
}

impl HistoryEntry {
    /// A fresh entry with nothing revealed yet.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            command: String::new(),
            output: String::new(),
            is_ai: false,
        }
    }
}

/// Append-only entry list; only the newest entry is mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Newest entry, the one an animation writes into.
    pub fn last_mut(&mut self) -> Option<&mut HistoryEntry> {
        self.entries.last_mut()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_appends_in_order_and_clear_empties() {
        let mut history = History::new();
        history.push(HistoryEntry::new("$ "));
        history.push(HistoryEntry::new("# "));
        assert_eq!(history.entries().len(), 2);
        assert_eq!(history.entries()[1].prompt, "# ");

        history.clear();
        assert!(history.entries().is_empty());
        assert!(history.entries().last().is_none());
    }

    #[test]
    fn last_mut_edits_newest_entry_only() {
        let mut history = History::new();
        history.push(HistoryEntry::new("$ "));
        history.push(HistoryEntry::new("$ "));
        if let Some(entry) = history.last_mut() {
            entry.command.push_str("ab");
        }
        assert_eq!(history.entries()[0].command, "");
        assert_eq!(history.entries()[1].command, "ab");
    }
}
