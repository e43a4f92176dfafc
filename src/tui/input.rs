//! Keyboard decoding and terminal-mode lifetime.
//!
//! Key events are turned into [`InputAction`]s here; whether an action is
//! honored (it is not while the session is typing) is the session's call.

use crate::session::InputAction;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use std::io::{self, Write};

/// Map one key event to an editing action. Releases and unbound keys yield
/// `None`.
pub fn action_for_key(key: &KeyEvent) -> Option<InputAction> {
    if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('d') if ctrl => Some(InputAction::Quit),
        KeyCode::Enter => Some(InputAction::Submit),
        KeyCode::Backspace => Some(InputAction::Backspace),
        KeyCode::Char(ch) => {
            // Ignore control/alt-modified printable keys.
            if ctrl || key.modifiers.contains(KeyModifiers::ALT) {
                None
            } else {
                Some(InputAction::Char(ch))
            }
        }
        _ => None,
    }
}

/// Raw mode + alternate screen + hidden cursor, restored on drop so the
/// user's terminal survives every return path.
pub struct ScreenGuard;

impl ScreenGuard {
    pub fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = stdout
            .execute(EnterAlternateScreen)
            .and_then(|out| out.execute(Hide))
        {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        Ok(Self)
    }
}

impl Drop for ScreenGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = stdout.execute(Show);
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = stdout.flush();
        let _ = terminal::disable_raw_mode();
    }
}
