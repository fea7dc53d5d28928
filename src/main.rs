//! Terminal memory game runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `memory_match::term`.
//! Wall-clock time is fed to the engine in whole milliseconds; the engine's
//! virtual clock fires the countdown and mismatch timers.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, trace, warn};

use memory_match::app::App;
use memory_match::config::AppConfig;
use memory_match::core::GameSnapshot;
use memory_match::input::{handle_key_event, should_quit};
use memory_match::logging;
use memory_match::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

const FRAME_MS: u64 = 50;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(&config)?;
    for warning in &config.warnings {
        warn!("{warning}");
    }
    info!(level = config.level.as_str(), seed = ?config.seed, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("exited");
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut app = App::new(config);
    let view = GameView::default();

    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut last_fingerprint = None;
    let mut dirty = true;

    let frame = Duration::from_millis(FRAME_MS);
    let mut last = Instant::now();
    let mut carry = Duration::ZERO;

    loop {
        app.snapshot_into(&mut snap);
        let fingerprint = snap.fingerprint();
        if dirty || last_fingerprint != Some(fingerprint) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, app.view_state(), Viewport::new(w, h), &mut fb);
            let stats = term.draw(&fb)?;
            trace!(full = stats.full, spans = stats.spans, bytes = stats.bytes, "frame");
            last_fingerprint = Some(fingerprint);
            dirty = false;
        }

        if event::poll(frame)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        app.shutdown();
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        dirty |= app.handle(action);
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        // Feed whole milliseconds; keep the remainder for the next frame.
        let now = Instant::now();
        carry += now - last;
        last = now;
        let whole_ms = carry.as_millis().min(u128::from(u32::MAX)) as u32;
        if whole_ms > 0 {
            carry -= Duration::from_millis(u64::from(whole_ms));
            app.advance(whole_ms);
        }
    }
}
