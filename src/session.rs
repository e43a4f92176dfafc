//! Terminal session state: history, input buffer, and the typing phases.
//!
//! A submitted command moves through three phases before input is accepted
//! again: the command is echoed by a [`Typewriter`], the dispatcher is asked
//! for a response on a spawned task, and the response is typed out. The caller
//! drives time forward with [`Session::tick`]; nothing here sleeps.

use crate::config::AnimationConfig;
use crate::content::WELCOME_COMMAND;
use crate::dispatch::{Dispatcher, Response};
use crate::history::{History, HistoryEntry};
use crate::typing::Typewriter;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

/// Editing intent decoded from one key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Char(char),
    Backspace,
    Submit,
    Quit,
}

/// Whether the caller should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// What a submit did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input or a session busy typing.
    Ignored,
    /// `clear` emptied the history.
    Cleared,
    /// A new entry was pushed and the echo animation started.
    Started,
}

/// Coarse phase, exposed for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    Idle,
    EchoingCommand,
    AwaitingResponse,
    TypingResponse,
}

enum Phase {
    Idle,
    EchoingCommand {
        command: String,
        typewriter: Typewriter,
    },
    AwaitingResponse {
        command: String,
        receiver: oneshot::Receiver<Response>,
    },
    TypingResponse {
        typewriter: Typewriter,
        is_ai: bool,
    },
}

/// All transient UI state for one run of the terminal.
pub struct Session {
    prompt: String,
    history: History,
    input: String,
    phase: Phase,
    dispatcher: Dispatcher,
    animation: AnimationConfig,
}

impl Session {
    pub fn new(
        prompt: impl Into<String>,
        dispatcher: Dispatcher,
        animation: AnimationConfig,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            history: History::new(),
            input: String::new(),
            phase: Phase::Idle,
            dispatcher,
            animation,
        }
    }

    /// Seed the greeting by auto-submitting the `welcome` command.
    pub fn start(&mut self) {
        self.history.clear();
        self.begin(WELCOME_COMMAND.to_string());
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Text typed since the last submit.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// True while an animation or request is in flight; input is discarded.
    pub fn is_typing(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    pub fn phase(&self) -> PhaseKind {
        match self.phase {
            Phase::Idle => PhaseKind::Idle,
            Phase::EchoingCommand { .. } => PhaseKind::EchoingCommand,
            Phase::AwaitingResponse { .. } => PhaseKind::AwaitingResponse,
            Phase::TypingResponse { .. } => PhaseKind::TypingResponse,
        }
    }

    /// Apply one key action. Everything but `Quit` is dropped while typing.
    pub fn handle_input(&mut self, action: InputAction) -> Flow {
        if action == InputAction::Quit {
            return Flow::Quit;
        }
        if self.is_typing() {
            return Flow::Continue;
        }
        match action {
            InputAction::Char(ch) => self.input.push(ch),
            InputAction::Backspace => {
                self.input.pop();
            }
            InputAction::Submit => {
                let line = self.input.clone();
                if self.submit(&line) != SubmitOutcome::Ignored {
                    self.input.clear();
                }
            }
            InputAction::Quit => {}
        }
        Flow::Continue
    }

    /// Submit one line as if typed and entered.
    pub fn submit(&mut self, line: &str) -> SubmitOutcome {
        if self.is_typing() {
            return SubmitOutcome::Ignored;
        }
        let command = line.trim();
        if command.is_empty() {
            return SubmitOutcome::Ignored;
        }
        if crate::content::is_clear(command) {
            tracing::debug!("history cleared");
            self.history.clear();
            return SubmitOutcome::Cleared;
        }
        self.begin(command.to_string());
        SubmitOutcome::Started
    }

    fn begin(&mut self, command: String) {
        self.history.push(HistoryEntry::new(self.prompt.clone()));
        let typewriter = Typewriter::new(
            command.clone(),
            Duration::from_millis(self.animation.command_char_ms),
        );
        self.phase = Phase::EchoingCommand {
            command,
            typewriter,
        };
        self.sync_last_entry();
        self.settle();
    }

    /// Advance animations by `elapsed` and collect a finished request.
    ///
    /// Must be called from within a tokio runtime: finishing the echo spawns
    /// the backend request.
    pub fn tick(&mut self, elapsed: Duration) {
        match &mut self.phase {
            Phase::EchoingCommand { typewriter, .. } => {
                typewriter.advance(elapsed);
            }
            Phase::TypingResponse { typewriter, .. } => {
                typewriter.advance(elapsed);
            }
            Phase::AwaitingResponse { .. } | Phase::Idle => {}
        }
        self.sync_last_entry();
        self.settle();
    }

    /// Copy the visible prefix of the active animation into the newest entry.
    fn sync_last_entry(&mut self) {
        let Some(entry) = self.history.last_mut() else {
            return;
        };
        match &self.phase {
            Phase::EchoingCommand { typewriter, .. } => {
                entry.command = typewriter.revealed().to_string();
            }
            Phase::TypingResponse { typewriter, is_ai } => {
                entry.output = typewriter.revealed().to_string();
                entry.is_ai = *is_ai;
            }
            Phase::AwaitingResponse { .. } | Phase::Idle => {}
        }
    }

    /// Run phase transitions until the session is waiting on time or I/O.
    fn settle(&mut self) {
        loop {
            let phase = std::mem::replace(&mut self.phase, Phase::Idle);
            self.phase = match phase {
                Phase::EchoingCommand {
                    command,
                    typewriter,
                } if typewriter.is_done() => {
                    let receiver = self.spawn_request(command.clone());
                    Phase::AwaitingResponse { command, receiver }
                }
                Phase::AwaitingResponse {
                    command,
                    mut receiver,
                } => match receiver.try_recv() {
                    Ok(response) => self.typing_phase(response),
                    Err(TryRecvError::Empty) => {
                        self.phase = Phase::AwaitingResponse { command, receiver };
                        return;
                    }
                    Err(TryRecvError::Closed) => {
                        tracing::warn!(command = %command, "request task dropped; using fallback");
                        let response = self.dispatcher.fallback(&command);
                        self.typing_phase(response)
                    }
                },
                Phase::TypingResponse { typewriter, .. } if typewriter.is_done() => Phase::Idle,
                other => {
                    self.phase = other;
                    self.sync_last_entry();
                    return;
                }
            };
            self.sync_last_entry();
        }
    }

    fn typing_phase(&self, response: Response) -> Phase {
        tracing::debug!(source = ?response.source, is_ai = response.is_ai, "typing response");
        Phase::TypingResponse {
            typewriter: Typewriter::new(
                response.text,
                Duration::from_millis(self.animation.output_char_ms),
            ),
            is_ai: response.is_ai,
        }
    }

    fn spawn_request(&self, command: String) -> oneshot::Receiver<Response> {
        let (tx, rx) = oneshot::channel();
        let dispatcher = self.dispatcher.clone();
        tokio::spawn(async move {
            let response = dispatcher.respond(&command).await;
            let _ = tx.send(response);
        });
        rx
    }
}
