//! Terminal breakout runner (default binary).
//!
//! One fixed-timestep loop per session: render, poll input until the next
//! tick, step the simulation. Terminal transitions hand off to the results
//! screen, which renders from the persisted record.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use tui_breakout::core::GameState;
use tui_breakout::input::{should_quit, InputHandler};
use tui_breakout::store::ScoreStore;
use tui_breakout::term::{GameView, ResultsView, TerminalRenderer, Viewport};
use tui_breakout::types::{SessionOutcome, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut store = ScoreStore::open_default();

    loop {
        let mut game = GameState::new(session_seed(), store.high_score());

        match play(term, &mut game, &mut store)? {
            Some(_) => {
                if !results_screen(term, &mut store)? {
                    return Ok(());
                }
            }
            // Player quit mid-session.
            None => return Ok(()),
        }
    }
}

/// Run one session to its terminal transition.
///
/// Returns `None` when the player quits instead of finishing.
fn play(
    term: &mut TerminalRenderer,
    game: &mut GameState,
    store: &mut ScoreStore,
) -> Result<Option<SessionOutcome>> {
    let view = GameView::default();
    let mut input = InputHandler::new();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(game, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            return Ok(None);
                        }
                        if let Some(action) = input.handle_key_press(key.code) {
                            game.apply_action(action);
                        }
                    }
                    KeyEventKind::Release => {
                        if let Some(action) = input.handle_key_release(key.code) {
                            game.apply_action(action);
                        }
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            for action in input.update() {
                game.apply_action(action);
            }
            game.set_flags(input.flags());

            if let Some(outcome) = game.step(store) {
                return Ok(Some(outcome));
            }
        }
    }
}

/// Show the end screen until the player retries (`true`) or quits (`false`).
fn results_screen(term: &mut TerminalRenderer, store: &mut ScoreStore) -> Result<bool> {
    // Render from what actually hit the disk, not live game state.
    let record = store.reload().clone();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = ResultsView::render(&record, Viewport::new(w, h));
        term.draw(&fb)?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if should_quit(key) {
                    return Ok(false);
                }
                if matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R')) {
                    return Ok(true);
                }
            }
        }
    }
}

/// Seed for the session's brick layout. `BREAKOUT_SEED` pins it for
/// reproducible runs; otherwise the clock decides.
fn session_seed() -> u32 {
    if let Some(seed) = std::env::var("BREAKOUT_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
    {
        return seed;
    }
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
