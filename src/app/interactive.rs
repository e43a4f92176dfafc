//! Full-screen interactive terminal.

use crossterm::event::{self, Event};
use std::io::{self, Write};
use std::time::{Duration, Instant};
use termfolio::clock::Clock;
use termfolio::config::Config;
use termfolio::dispatch::Dispatcher;
use termfolio::session::{Flow, InputAction, Session};
use termfolio::tui::renderer::screen_size;
use termfolio::tui::settings::{CARET_BLINK_MS, FRAME_POLL_MS, SPINNER_FRAMES, SPINNER_TICK_MS};
use termfolio::tui::{action_for_key, layout_frame, layout_splash, Renderer, ScreenGuard, ViewState};

/// Run the splash screen and then the terminal until the user quits.
pub(crate) fn run(config: &Config, dispatcher: Dispatcher) -> io::Result<()> {
    let _guard = ScreenGuard::acquire()?;
    let mut stdout = io::stdout();
    let mut renderer = Renderer::new(config.display.color);

    if config.display.splash {
        let duration = Duration::from_millis(config.display.splash_ms);
        if show_splash(&mut stdout, &mut renderer, &config.profile.splash_text, duration)?
            == Flow::Quit
        {
            return Ok(());
        }
        renderer.invalidate();
    }

    let mut session = Session::new(
        config.profile.prompt.clone(),
        dispatcher,
        config.animation,
    );
    session.start();
    tracing::debug!("session started");

    let mut clock = Clock::new();
    let started = Instant::now();
    let mut last_tick = started;
    loop {
        let now = Instant::now();
        session.tick(now.duration_since(last_tick));
        last_tick = now;
        clock.refresh(now);

        let elapsed_ms = started.elapsed().as_millis();
        let view = ViewState {
            caret_visible: (elapsed_ms / u128::from(CARET_BLINK_MS)) % 2 == 0,
            spinner_frame: SPINNER_FRAMES
                [(elapsed_ms / u128::from(SPINNER_TICK_MS)) as usize % SPINNER_FRAMES.len()],
            clock: config.display.clock.then(|| clock.text()),
        };
        let (columns, rows) = screen_size();
        renderer.draw(&mut stdout, layout_frame(&session, &view, columns, rows))?;

        if !event::poll(Duration::from_millis(FRAME_POLL_MS))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                if let Some(action) = action_for_key(&key) {
                    if session.handle_input(action) == Flow::Quit {
                        break;
                    }
                }
            }
            Event::Resize(..) => renderer.invalidate(),
            _ => {}
        }
    }
    Ok(())
}

/// Show the splash for `duration`. Only the quit chord cuts it short.
fn show_splash<W: Write>(
    out: &mut W,
    renderer: &mut Renderer,
    text: &str,
    duration: Duration,
) -> io::Result<Flow> {
    let deadline = Instant::now() + duration;
    loop {
        let (columns, rows) = screen_size();
        renderer.draw(out, layout_splash(text, columns, rows))?;

        let now = Instant::now();
        if now >= deadline {
            return Ok(Flow::Continue);
        }
        if !event::poll(deadline - now)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if action_for_key(&key) == Some(InputAction::Quit) => {
                return Ok(Flow::Quit);
            }
            Event::Resize(..) => renderer.invalidate(),
            _ => {}
        }
    }
}
