//! Core game logic - pure, deterministic, testable.
//!
//! Everything in this crate is synchronous data manipulation: no terminal,
//! no clock, no filesystem. The runner owns time and I/O; this crate owns
//! the rules. Given the same seed and the same action sequence, two games
//! are byte-for-byte identical, which is what makes the whole simulation
//! testable without a terminal attached.

pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use game_state::{Events, GameState};
pub use rng::XorShift32;
pub use snapshot::{GameSnapshot, CELL_BODY, CELL_EMPTY, CELL_FOOD, CELL_HEAD};

pub use tui_snake_types as types;
