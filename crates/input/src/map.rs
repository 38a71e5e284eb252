//! Keyboard mapping - key events to game actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use tui_snake_types::{Direction, GameAction};

/// Map a key event to a game action.
///
/// Arrows and vim keys steer; space or enter starts (and restarts after a
/// game over), `p` pauses, `r` restarts mid-game, `w` and `s` flip the wrap
/// and sound toggles. Unbound keys return `None`.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(GameAction::Turn(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(GameAction::Turn(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(GameAction::Turn(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(GameAction::Turn(Direction::Right))
        }
        KeyCode::Char(' ') | KeyCode::Enter => Some(GameAction::Start),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
        KeyCode::Char('w') | KeyCode::Char('W') => Some(GameAction::ToggleWrap),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::ToggleSound),
        _ => None,
    }
}

/// Whether a key event should quit the application.
///
/// `q` or Ctrl-C exits at any phase.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
