//! Swipe detection - mouse drags to direction changes.
//!
//! Touch terminals and plain mice both arrive as crossterm mouse events.
//! A press anchors the gesture origin; the first drag that clears the
//! dead-zone resolves to a direction along the dominant axis and consumes
//! the gesture, so one press-drag-release yields at most one turn.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use tui_snake_types::{Direction, SWIPE_MIN_COLS, SWIPE_MIN_ROWS};

/// Tracks one in-flight press-drag gesture.
#[derive(Debug, Default)]
pub struct SwipeDetector {
    origin: Option<(u16, u16)>,
}

impl SwipeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a mouse event; returns a direction when a swipe resolves.
    pub fn on_mouse_event(&mut self, ev: MouseEvent) -> Option<Direction> {
        match ev.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.origin = Some((ev.column, ev.row));
                None
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let (ox, oy) = self.origin?;
                let dx = ev.column as i32 - ox as i32;
                let dy = ev.row as i32 - oy as i32;
                let ax = dx.unsigned_abs() as u16;
                let ay = dy.unsigned_abs() as u16;
                if ax < SWIPE_MIN_COLS && ay < SWIPE_MIN_ROWS {
                    return None;
                }
                self.origin = None;
                // Cells are ~2:1 wide, so halve the column displacement
                // before comparing axes.
                if ax / 2 >= ay {
                    Some(if dx > 0 { Direction::Right } else { Direction::Left })
                } else {
                    Some(if dy > 0 { Direction::Down } else { Direction::Up })
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.origin = None;
                None
            }
            _ => None,
        }
    }
}
