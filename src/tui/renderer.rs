//! Full-screen frame layout and painting.
//!
//! Layout is a pure function from session state to styled rows so it can be
//! tested without a terminal; [`Renderer`] then paints rows with crossterm and
//! skips repaints when nothing visual changed.

use crate::content::HEADER_COMMANDS;
use crate::session::{PhaseKind, Session};
use crate::tui::settings;
use crate::tui::splash::splash_rows;
use crate::tui::text::{clip_to_width, visible_width, wrap_text};
use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, PrintStyledContent, Stylize};
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;
use std::io::{self, Write};

/// Semantic color role of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Header,
    Rule,
    Prompt,
    Command,
    Output,
    AiTag,
    Caret,
    Spinner,
    Clock,
    Splash,
}

impl Tone {
    fn color(self) -> Option<Color> {
        match self {
            Self::Plain => None,
            Self::Header => Some(settings::COLOR_HEADER),
            Self::Rule => Some(settings::COLOR_RULE),
            Self::Prompt => Some(settings::COLOR_PROMPT),
            Self::Command => Some(settings::COLOR_COMMAND),
            Self::Output => Some(settings::COLOR_OUTPUT),
            Self::AiTag => Some(settings::COLOR_AI_TAG),
            Self::Caret => Some(settings::COLOR_CARET),
            Self::Spinner => Some(settings::COLOR_SPINNER),
            Self::Clock => Some(settings::COLOR_CLOCK),
            Self::Splash => Some(settings::COLOR_SPLASH),
        }
    }

    fn bold(self) -> bool {
        matches!(self, Self::Prompt | Self::Clock | Self::Splash)
    }
}

/// A run of text sharing one tone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
}

impl Span {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

/// One screen row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub spans: Vec<Span>,
}

impl Row {
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    pub fn blank() -> Self {
        Self::default()
    }

    /// Clip spans so the row fits `width` visible columns.
    fn clipped(mut self, width: usize) -> Self {
        let mut used = 0usize;
        self.spans.retain_mut(|span| {
            if used >= width {
                return false;
            }
            let clipped = clip_to_width(&span.text, width - used);
            used += visible_width(&clipped);
            span.text = clipped;
            !span.text.is_empty()
        });
        self
    }
}

/// Transient view state that does not belong to the session.
#[derive(Debug, Clone, Copy)]
pub struct ViewState<'a> {
    pub caret_visible: bool,
    pub spinner_frame: char,
    pub clock: Option<&'a str>,
}

/// Lay out the terminal frame for a `columns` x `rows` screen.
///
/// The body is pinned to its newest rows so the latest output stays visible.
pub fn layout_frame(
    session: &Session,
    view: &ViewState<'_>,
    columns: usize,
    rows: usize,
) -> Vec<Row> {
    let body_width = columns.saturating_sub(settings::BODY_INDENT.len()).max(1);

    let rule = settings::RULE_GLYPH.to_string().repeat(columns);
    let mut frame = vec![header_row(), Row::new(vec![Span::new(rule, Tone::Rule)])];

    let body = body_rows(session, view, body_width);
    let footer = view.clock.map(|clock| {
        let pad = columns.saturating_sub(visible_width(clock));
        Row::new(vec![
            Span::new(" ".repeat(pad), Tone::Plain),
            Span::new(clock, Tone::Clock),
        ])
    });

    let body_height = rows
        .saturating_sub(frame.len())
        .saturating_sub(usize::from(footer.is_some()));
    let skip = body.len().saturating_sub(body_height);
    let visible = body.len() - skip;
    frame.extend(body.into_iter().skip(skip));
    frame.extend(std::iter::repeat_with(Row::blank).take(body_height - visible));
    frame.extend(footer);

    frame.truncate(rows);
    frame.into_iter().map(|row| row.clipped(columns)).collect()
}

fn header_row() -> Row {
    let mut spans = Vec::new();
    for (idx, name) in HEADER_COMMANDS.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::new(settings::HEADER_SEPARATOR, Tone::Rule));
        }
        spans.push(Span::new(*name, Tone::Header));
    }
    Row::new(spans)
}

fn body_rows(session: &Session, view: &ViewState<'_>, width: usize) -> Vec<Row> {
    let indent = || Span::new(settings::BODY_INDENT, Tone::Plain);
    let mut rows = Vec::new();

    for entry in session.history().entries() {
        rows.push(Row::new(vec![
            indent(),
            Span::new(entry.prompt.as_str(), Tone::Prompt),
            Span::new(entry.command.as_str(), Tone::Command),
        ]));
        if entry.output.is_empty() {
            continue;
        }
        if entry.is_ai {
            rows.push(Row::new(vec![indent(), Span::new(settings::AI_TAG, Tone::AiTag)]));
        }
        for line in wrap_text(&entry.output, width) {
            rows.push(Row::new(vec![indent(), Span::new(line, Tone::Output)]));
        }
        rows.push(Row::blank());
    }

    match session.phase() {
        PhaseKind::Idle => {
            let caret = if view.caret_visible {
                settings::CARET_GLYPH
            } else {
                " "
            };
            rows.push(Row::new(vec![
                indent(),
                Span::new(session.prompt(), Tone::Prompt),
                Span::new(session.input(), Tone::Command),
                Span::new(caret, Tone::Caret),
            ]));
        }
        PhaseKind::AwaitingResponse => {
            rows.push(Row::new(vec![
                indent(),
                Span::new(
                    format!("[{}] {}", view.spinner_frame, settings::AWAITING_LABEL),
                    Tone::Spinner,
                ),
            ]));
        }
        PhaseKind::EchoingCommand | PhaseKind::TypingResponse => {}
    }
    rows
}

/// Lay out the splash screen: block letters centered on a blank screen.
pub fn layout_splash(text: &str, columns: usize, rows: usize) -> Vec<Row> {
    let art = splash_rows(text);
    let art_width = art.iter().map(|row| visible_width(row)).max().unwrap_or(0);
    let left = columns.saturating_sub(art_width) / 2;
    let top = rows.saturating_sub(art.len()) / 2;

    let mut frame = vec![Row::blank(); top];
    for line in art {
        frame.push(Row::new(vec![
            Span::new(" ".repeat(left), Tone::Plain),
            Span::new(line, Tone::Splash),
        ]));
    }
    frame.resize(rows, Row::blank());
    frame.into_iter().map(|row| row.clipped(columns)).collect()
}

/// Paints frames to a terminal.
#[derive(Debug, Default)]
pub struct Renderer {
    /// Whether ANSI color/style output is enabled.
    color: bool,
    last_frame: Option<Vec<Row>>,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self {
            color,
            last_frame: None,
        }
    }

    /// Paint `frame` unless it matches the previous one. Returns whether
    /// anything was written.
    pub fn draw<W: Write>(&mut self, out: &mut W, frame: Vec<Row>) -> io::Result<bool> {
        if self.last_frame.as_ref() == Some(&frame) {
            return Ok(false);
        }
        for (y, row) in frame.iter().enumerate() {
            let y = u16::try_from(y).unwrap_or(u16::MAX);
            out.queue(MoveTo(0, y))?;
            out.queue(Clear(ClearType::CurrentLine))?;
            self.write_row(out, row)?;
        }
        out.flush()?;
        self.last_frame = Some(frame);
        Ok(true)
    }

    /// Forget the previous frame so the next draw repaints everything.
    pub fn invalidate(&mut self) {
        self.last_frame = None;
    }

    fn write_row<W: Write>(&self, out: &mut W, row: &Row) -> io::Result<()> {
        for span in &row.spans {
            match span.tone.color().filter(|_| self.color) {
                Some(color) => {
                    let mut styled = span.text.as_str().with(color);
                    if span.tone.bold() {
                        styled = styled.bold();
                    }
                    out.queue(PrintStyledContent(styled))?;
                }
                None => {
                    out.queue(Print(span.text.as_str()))?;
                }
            }
        }
        Ok(())
    }
}

/// Terminal size with a fixed fallback when it cannot be read.
pub fn screen_size() -> (usize, usize) {
    let (columns, rows) = crossterm::terminal::size()
        .unwrap_or((settings::FALLBACK_COLUMNS, settings::FALLBACK_ROWS));
    (usize::from(columns), usize::from(rows))
}
