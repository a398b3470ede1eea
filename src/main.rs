//! Hanami terminal runner (default binary).
//!
//! Crossterm input and the framebuffer renderer around one `GameSession`.
//! The session only moves when this loop calls `tick`.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use hanami::config::AppConfig;
use hanami::core::{GameSession, GameSnapshot};
use hanami::input::{handle_key_event, should_quit, should_restart};
use hanami::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use hanami::types::TICK_MS;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    config.init_logging()?;
    info!(pinned_seed = ?config.seed, skip_intro = config.skip_intro, "starting hanami");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut session = GameSession::new(config.session_config());
    debug!(seed = session.config().seed, "session created");

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(score = session.score(), level = session.level(), "quit");
                        return Ok(());
                    }
                    if should_restart(key) {
                        session = GameSession::new(config.session_config());
                        info!(seed = session.config().seed, "restart");
                        session.start();
                    } else if !session.started() {
                        session.start();
                    } else if let Some(action) = handle_key_event(key) {
                        session.push_command(action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            session.tick(elapsed.as_millis().min(u32::MAX as u128) as u32);
            for event in session.drain_events() {
                debug!(?event, "game event");
            }
        }
    }
}
