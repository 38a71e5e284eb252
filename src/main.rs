//! Terminal Snake runner (default binary).
//!
//! Owns everything the core deliberately doesn't: the wall clock, the
//! terminal, the mouse, the bell, and the high-score file. The simulation
//! itself never sees any of them.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_snake::core::GameState;
use tui_snake::input::{handle_key_event, should_quit, SwipeDetector};
use tui_snake::store::HighScoreStore;
use tui_snake::term::{Feedback, FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_snake::types::{GameAction, GameEvent, Phase, FRAME_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let store = HighScoreStore::from_env();
    let mut game = GameState::new(time_seed());
    game.set_best(store.load());

    let view = GameView::default();
    let mut swipe = SwipeDetector::new();
    let feedback = Feedback::new();

    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = game.snapshot();

    let frame_duration = Duration::from_millis(FRAME_MS as u64);
    let mut last_frame = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;

        // Input with timeout until the next frame.
        let timeout = frame_duration
            .checked_sub(last_frame.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        dispatch(&mut game, action);
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(dir) = swipe.on_mouse_event(mouse) {
                        if game.phase() == Phase::Running {
                            game.queue_turn(dir);
                        } else {
                            // A swipe also starts/restarts, like a tap on
                            // the playfield would.
                            dispatch(&mut game, GameAction::Start);
                        }
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Simulate the elapsed wall time.
        let now = Instant::now();
        let elapsed_ms = now.duration_since(last_frame).as_millis() as u32;
        last_frame = now;

        for ev in game.tick(elapsed_ms) {
            match ev {
                GameEvent::AteFood => {
                    if game.sound() {
                        feedback.food();
                    }
                }
                GameEvent::GameOver { new_best } => {
                    if game.sound() {
                        feedback.game_over();
                    }
                    if new_best {
                        // Persist immediately; a failed write only costs
                        // this one best.
                        let _ = store.save(game.best());
                    }
                }
            }
        }
    }
}

/// Route lifecycle actions through the time-seed clock; everything else
/// goes straight to the state.
fn dispatch(game: &mut GameState, action: GameAction) {
    match action {
        GameAction::Start => {
            if game.phase() == Phase::GameOver {
                game.restart(time_seed());
            } else {
                game.start();
            }
        }
        GameAction::Restart => game.restart(time_seed()),
        _ => {
            game.apply_action(action);
        }
    }
}

/// Seed new games from the wall clock.
fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1)
}
