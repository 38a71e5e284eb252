//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, input mapping, terminal rendering).
//!
//! # Grid
//!
//! The playfield is a square grid of `GRID_SIZE` x `GRID_SIZE` cells
//! (default 24). Coordinates are `(x, y)` with the origin at the top-left,
//! `x` growing right and `y` growing down. The snake is an ordered list of
//! cells, head last.
//!
//! # Game timing constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_START_MS` | 140 | Simulation interval at the start of a game |
//! | `TICK_FLOOR_MS` | 70 | Minimum simulation interval |
//! | `TICK_STEP_MS` | 4 | Interval reduction per food eaten |
//! | `FRAME_MS` | 16 | Render/input frame cadence (~60 FPS) |
//!
//! The simulation is decoupled from the frame rate by an accumulator: every
//! frame adds its elapsed time, and the game steps once per tick interval
//! accumulated.
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, GameAction, GRID_SIZE};
//!
//! let dir = Direction::Right;
//! assert_eq!(dir.delta(), (1, 0));
//! assert_eq!(dir.opposite(), Direction::Left);
//!
//! let action = GameAction::Turn(Direction::Up);
//! assert_eq!(action, GameAction::Turn(Direction::Up));
//!
//! assert_eq!(GRID_SIZE, 24);
//! ```

/// Playfield side length in cells (24x24 grid)
pub const GRID_SIZE: i16 = 24;

/// Simulation interval at the start of a game (140ms per step)
pub const TICK_START_MS: u32 = 140;

/// Minimum simulation interval; the game never gets faster than this
pub const TICK_FLOOR_MS: u32 = 70;

/// Interval reduction applied each time food is eaten
pub const TICK_STEP_MS: u32 = 4;

/// Render/input frame cadence in milliseconds (~60 FPS)
pub const FRAME_MS: u32 = 16;

/// Starting snake length (3 cells, centered, moving right)
pub const START_LENGTH: usize = 3;

/// Minimum horizontal drag, in terminal columns, to register a swipe.
///
/// Terminal analog of a small pointer dead-zone that suppresses accidental
/// clicks. Columns are roughly half as wide as rows are tall, hence the
/// asymmetric thresholds.
pub const SWIPE_MIN_COLS: u16 = 3;

/// Minimum vertical drag, in terminal rows, to register a swipe.
pub const SWIPE_MIN_ROWS: u16 = 2;

/// A cell on the playfield grid.
///
/// Signed so that one-past-the-edge positions can be represented while
/// checking wall collisions; a live snake or food cell is always within
/// `[0, GRID_SIZE)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i16,
    pub y: i16,
}

impl Point {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// The neighboring cell one step in `dir`, without wrapping.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// The neighboring cell one step in `dir`, wrapped onto the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::{Direction, Point, GRID_SIZE};
    ///
    /// let p = Point::new(0, 5).step_wrapped(Direction::Left);
    /// assert_eq!(p, Point::new(GRID_SIZE - 1, 5));
    /// ```
    pub fn step_wrapped(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(
            (self.x + dx).rem_euclid(GRID_SIZE),
            (self.y + dy).rem_euclid(GRID_SIZE),
        )
    }

    /// Whether the cell lies inside the playfield.
    pub fn in_bounds(self) -> bool {
        self.x >= 0 && self.x < GRID_SIZE && self.y >= 0 && self.y < GRID_SIZE
    }
}

/// The four movement directions
///
/// Deltas are in grid coordinates: `x` grows right, `y` grows down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit-vector delta for this direction
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Up.delta(), (0, -1));
    /// assert_eq!(Direction::Down.delta(), (0, 1));
    /// assert_eq!(Direction::Left.delta(), (-1, 0));
    /// assert_eq!(Direction::Right.delta(), (1, 0));
    /// ```
    pub fn delta(self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The 180-degree reversal of this direction
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Game lifecycle phase
///
/// - **Idle**: before the first start; the board is initialized and drawn
/// - **Running**: simulation ticks advance the snake
/// - **Paused**: simulation suspended, render still available
/// - **GameOver**: wall or self collision ended the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Paused,
    GameOver,
}

/// Game actions produced by input handling
///
/// Both keyboard and swipe input reduce to these; the core applies them with
/// a single turn-lock contract regardless of source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Request a direction change for the upcoming tick
    Turn(Direction),
    /// Begin a game from Idle, or resume from Paused
    Start,
    /// Toggle pause state (only meaningful while Running/Paused)
    Pause,
    /// Abandon the current game and begin a fresh one
    Restart,
    /// Toggle wrap (borderless) mode
    ToggleWrap,
    /// Toggle sound feedback
    ToggleSound,
}

/// Events emitted by the simulation, consumed by the runner
///
/// The runner maps these to side effects (bell feedback, high-score
/// persistence) that the core deliberately knows nothing about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The snake ate the food this step
    AteFood,
    /// The game ended; `new_best` is set when the final score beat the
    /// stored best and should be persisted
    GameOver { new_best: bool },
}
