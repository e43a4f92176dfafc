//! Non-interactive modes: one-shot and line-per-command.

use std::io::{self, Write};
use termfolio::content::WELCOME_COMMAND;
use termfolio::dispatch::{Dispatcher, Resolution, Response};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Print the response to a single command. `clear` and blank input print
/// nothing.
pub(crate) async fn run_one_shot<W: Write>(
    dispatcher: &Dispatcher,
    command: &str,
    out: &mut W,
) -> io::Result<()> {
    if let Some(Resolution::Respond(response)) = dispatcher.resolve(command).await {
        writeln!(out, "{}", response.text)?;
    }
    out.flush()
}

/// Print the greeting, then answer one command per input line until EOF.
pub(crate) async fn run_lines<R, W>(
    dispatcher: &Dispatcher,
    prompt: &str,
    input: R,
    out: &mut W,
) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let welcome = dispatcher.respond(WELCOME_COMMAND).await;
    write_exchange(out, prompt, WELCOME_COMMAND, &welcome)?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match dispatcher.resolve(&line).await {
            Some(Resolution::Respond(response)) => {
                write_exchange(out, prompt, line.trim(), &response)?;
            }
            Some(Resolution::Clear) | None => {}
        }
    }
    Ok(())
}

fn write_exchange<W: Write>(
    out: &mut W,
    prompt: &str,
    command: &str,
    response: &Response,
) -> io::Result<()> {
    writeln!(out, "{prompt}{command}")?;
    if response.is_ai {
        writeln!(out, "[ai]")?;
    }
    writeln!(out, "{}", response.text)?;
    writeln!(out)?;
    out.flush()
}
