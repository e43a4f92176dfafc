//! Static fallback table keyed by command name.
//!
//! The table is built once at startup from the built-in texts plus any
//! `[responses]` overrides in the config file, and is read-only afterwards.

mod responses;

use std::collections::BTreeMap;

pub use responses::HEADER_COMMANDS;

/// Command that seeds the initial greeting on startup.
pub const WELCOME_COMMAND: &str = "welcome";
/// Reserved command that empties the history without a backend round-trip.
pub const CLEAR_COMMAND: &str = "clear";

/// Read-only mapping from lowercased command name to canned response text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackTable {
    entries: BTreeMap<String, String>,
}

impl FallbackTable {
    /// Built-in portfolio texts with `owner` substituted into the greeting.
    pub fn builtin(owner: &str) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(WELCOME_COMMAND.to_string(), responses::welcome(owner));
        for (name, text) in [
            ("about", responses::ABOUT),
            ("projects", responses::PROJECTS),
            ("skills", responses::SKILLS),
            ("experience", responses::EXPERIENCE),
            ("contact", responses::CONTACT),
            ("education", responses::EDUCATION),
            ("references", responses::REFERENCES),
            ("help", responses::HELP),
        ] {
            entries.insert(name.to_string(), text.to_string());
        }
        Self { entries }
    }

    /// Replace or add entries. Keys are lowercased.
    pub fn with_overrides<'a, I>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        for (name, text) in overrides {
            self.entries.insert(name.to_lowercase(), text.clone());
        }
        self
    }

    /// Case-insensitive exact lookup.
    pub fn get(&self, command: &str) -> Option<&str> {
        self.entries
            .get(&command.to_lowercase())
            .map(String::as_str)
    }

    /// Response for `command`, or the generic not-recognized message.
    pub fn respond(&self, command: &str) -> String {
        self.get(command)
            .map(str::to_string)
            .unwrap_or_else(|| not_recognized(command))
    }
}

/// Message shown for commands missing from the table.
pub fn not_recognized(command: &str) -> String {
    format!("Command '{command}' not recognized. Type 'help' to see available commands.")
}

/// Whether `command` is the reserved clear command (case-insensitive).
pub fn is_clear(command: &str) -> bool {
    command.trim().eq_ignore_ascii_case(CLEAR_COMMAND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let table = FallbackTable::builtin("Neema Mwende");
        assert_eq!(table.get("SKILLS"), table.get("skills"));
        assert!(table.get("Skills").is_some_and(|t| t.starts_with("Technical Skills:")));
    }

    #[test]
    fn lookup_is_exact_match() {
        let table = FallbackTable::builtin("Neema Mwende");
        assert!(table.get("skill").is_none());
        assert!(table.get("skills please").is_none());
    }

    #[test]
    fn welcome_names_the_owner() {
        let table = FallbackTable::builtin("Ada Lovelace");
        let welcome = table.get(WELCOME_COMMAND).expect("welcome entry");
        assert!(welcome.starts_with("Hi, I'm Ada Lovelace, a Software & AI Engineer."));
    }

    #[test]
    fn unknown_command_gets_generic_message_with_original_case() {
        let table = FallbackTable::builtin("Neema Mwende");
        assert_eq!(
            table.respond("Dance"),
            "Command 'Dance' not recognized. Type 'help' to see available commands."
        );
    }

    #[test]
    fn every_header_command_has_an_entry() {
        let table = FallbackTable::builtin("Neema Mwende");
        for name in HEADER_COMMANDS {
            assert!(table.get(name).is_some(), "missing {name}");
        }
        assert!(table.get("help").is_some_and(|h| h.contains("references")));
    }

    #[test]
    fn overrides_replace_and_extend() {
        let mut extra = BTreeMap::new();
        extra.insert("About".to_string(), "short bio".to_string());
        extra.insert("hobbies".to_string(), "chess".to_string());
        let table = FallbackTable::builtin("N").with_overrides(&extra);
        assert_eq!(table.get("about"), Some("short bio"));
        assert_eq!(table.get("HOBBIES"), Some("chess"));
        assert!(table.get("help").is_some());
    }

    #[test]
    fn clear_is_reserved_case_insensitively() {
        assert!(is_clear("clear"));
        assert!(is_clear(" CLEAR "));
        assert!(!is_clear("clear all"));
    }
}
