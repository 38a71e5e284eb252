//! Render snapshot - plain data handed to renderers.
//!
//! Renderers never read `GameState` directly; the state writes a snapshot
//! and the view consumes it. This keeps rendering a pure function of data
//! and lets the hot path reuse one snapshot across frames without
//! allocating.

use tui_snake_types::{Direction, Phase, Point, GRID_SIZE};

/// Empty grid cell marker.
pub const CELL_EMPTY: u8 = 0;
/// Snake body segment marker.
pub const CELL_BODY: u8 = 1;
/// Snake head marker.
pub const CELL_HEAD: u8 = 2;
/// Food marker.
pub const CELL_FOOD: u8 = 3;

/// Complete game state snapshot for rendering.
#[derive(Debug, Clone)]
pub struct GameSnapshot {
    /// Grid contents indexed `[y][x]` using the `CELL_*` markers.
    pub grid: [[u8; GRID_SIZE as usize]; GRID_SIZE as usize],
    pub head: Point,
    pub direction: Direction,
    pub phase: Phase,
    pub score: u32,
    pub best: u32,
    /// Current simulation interval in milliseconds.
    pub tick_ms: u32,
    pub wrap: bool,
    pub sound: bool,
    /// Seed the running game was created from (for replay capture).
    pub seed: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[CELL_EMPTY; GRID_SIZE as usize]; GRID_SIZE as usize],
            head: Point::default(),
            direction: Direction::Right,
            phase: Phase::Idle,
            score: 0,
            best: 0,
            tick_ms: 0,
            wrap: false,
            sound: false,
            seed: 0,
        }
    }
}

impl GameSnapshot {
    /// Marker at a grid cell.
    pub fn cell(&self, x: i16, y: i16) -> u8 {
        self.grid[y as usize][x as usize]
    }

    /// Number of cells carrying the given marker.
    pub fn count(&self, marker: u8) -> usize {
        self.grid
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&c| c == marker)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_snapshot_is_an_empty_idle_board() {
        let snap = GameSnapshot::default();
        assert_eq!(snap.phase, Phase::Idle);
        assert_eq!(snap.count(CELL_EMPTY), (GRID_SIZE * GRID_SIZE) as usize);
        assert_eq!(snap.count(CELL_BODY), 0);
        assert_eq!(snap.count(CELL_FOOD), 0);
    }
}
