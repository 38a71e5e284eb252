//! Game state module - the snake simulation and its lifecycle.
//!
//! Owns the snake, the food, the direction/turn-lock pair, scoring, the
//! tick-interval speedup and the Idle/Running/Paused/GameOver machine. The
//! fixed-timestep accumulator lives here too: callers feed wall-clock
//! elapsed time into [`GameState::tick`] and get back zero or more executed
//! steps' worth of events.
//!
//! The module is deliberately free of I/O. Side effects (bell feedback,
//! high-score persistence) are driven by the [`GameEvent`]s it emits.

use std::collections::VecDeque;

use arrayvec::ArrayVec;

use tui_snake_types::{
    Direction, GameAction, GameEvent, Phase, Point, GRID_SIZE, START_LENGTH, TICK_FLOOR_MS,
    TICK_START_MS, TICK_STEP_MS,
};

use crate::rng::XorShift32;
use crate::snapshot::{GameSnapshot, CELL_BODY, CELL_EMPTY, CELL_FOOD, CELL_HEAD};

/// Bounded event list produced by one [`GameState::tick`] call.
///
/// A single tick call can execute several steps after a long frame, each of
/// which may eat food; the capacity comfortably covers that and overflow is
/// dropped rather than allocated for.
pub type Events = ArrayVec<GameEvent, 8>;

/// Rejection-sampling attempts before food placement falls back to a
/// deterministic scan of free cells.
const FOOD_SAMPLE_ATTEMPTS: u32 = 64;

/// Complete game state.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Snake cells, tail at the front, head at the back.
    snake: VecDeque<Point>,
    food: Point,
    /// Direction the snake is actually moving.
    dir: Direction,
    /// Direction committed at the start of the next step.
    pending_dir: Direction,
    /// Set when a turn has been accepted for the upcoming step; cleared by
    /// the step itself. Prevents queueing two turns inside one tick, which
    /// could smuggle a reversal through a corner.
    turn_locked: bool,
    score: u32,
    best: u32,
    tick_ms: u32,
    /// Fixed-timestep accumulator (milliseconds of unsimulated time).
    acc_ms: u32,
    phase: Phase,
    wrap: bool,
    sound: bool,
    rng: XorShift32,
    seed: u32,
}

impl GameState {
    /// Create a fresh board in the Idle phase: a 3-cell snake centered on
    /// the grid moving right, food placed, score 0, starting speed.
    pub fn new(seed: u32) -> Self {
        let mid = GRID_SIZE / 2;
        let snake: VecDeque<Point> = (0..START_LENGTH as i16)
            .map(|i| Point::new(mid - (START_LENGTH as i16 - 1) + i, mid))
            .collect();

        let mut state = Self {
            snake,
            food: Point::default(),
            dir: Direction::Right,
            pending_dir: Direction::Right,
            turn_locked: false,
            score: 0,
            best: 0,
            tick_ms: TICK_START_MS,
            acc_ms: 0,
            phase: Phase::Idle,
            wrap: false,
            sound: false,
            rng: XorShift32::new(seed),
            seed,
        };
        // A 3-cell snake can never fill the board, so this always succeeds.
        state.place_food();
        state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Install the persisted best score (read at startup).
    pub fn set_best(&mut self, best: u32) {
        self.best = best;
    }

    pub fn tick_ms(&self) -> u32 {
        self.tick_ms
    }

    pub fn wrap(&self) -> bool {
        self.wrap
    }

    pub fn sound(&self) -> bool {
        self.sound
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn snake(&self) -> &VecDeque<Point> {
        &self.snake
    }

    pub fn head(&self) -> Point {
        // Length >= 1 is a construction invariant.
        *self.snake.back().unwrap_or(&Point::new(0, 0))
    }

    pub fn food(&self) -> Point {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.dir
    }

    /// Begin the game from Idle, or resume from Paused.
    ///
    /// Restarting after game over needs a fresh seed and goes through
    /// [`GameState::restart`] instead.
    pub fn start(&mut self) -> bool {
        match self.phase {
            Phase::Idle | Phase::Paused => {
                self.phase = Phase::Running;
                true
            }
            Phase::Running | Phase::GameOver => false,
        }
    }

    /// Re-initialize all game data with a new seed and begin running.
    ///
    /// The best score and the user toggles (wrap, sound) survive restarts;
    /// everything else is rebuilt.
    pub fn restart(&mut self, seed: u32) {
        let best = self.best;
        let wrap = self.wrap;
        let sound = self.sound;
        *self = Self::new(seed);
        self.best = best;
        self.wrap = wrap;
        self.sound = sound;
        self.phase = Phase::Running;
    }

    /// Apply an input-derived action.
    ///
    /// Returns whether the action had an effect. `Start` and `Restart` are
    /// lifecycle actions that need a caller-supplied seed clock and are
    /// routed to [`GameState::start`]/[`GameState::restart`] by the runner;
    /// they are inert here.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Turn(dir) => self.queue_turn(dir),
            GameAction::Pause => match self.phase {
                Phase::Running => {
                    self.phase = Phase::Paused;
                    true
                }
                Phase::Paused => {
                    self.phase = Phase::Running;
                    true
                }
                Phase::Idle | Phase::GameOver => false,
            },
            GameAction::ToggleWrap => {
                self.wrap = !self.wrap;
                true
            }
            GameAction::ToggleSound => {
                self.sound = !self.sound;
                true
            }
            GameAction::Start | GameAction::Restart => false,
        }
    }

    /// Request a direction change for the upcoming step.
    ///
    /// Rejected while the turn-lock is held or when the request reverses the
    /// active direction. A request equal to the current direction is
    /// accepted and consumes the lock.
    pub fn queue_turn(&mut self, dir: Direction) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        if self.turn_locked {
            return false;
        }
        if dir == self.dir.opposite() {
            return false;
        }
        self.pending_dir = dir;
        self.turn_locked = true;
        true
    }

    /// Feed elapsed wall time into the fixed-timestep accumulator and run
    /// zero or more simulation steps.
    ///
    /// Does nothing outside the Running phase, so paused or idle wall time
    /// is never simulated.
    pub fn tick(&mut self, elapsed_ms: u32) -> Events {
        let mut events = Events::new();
        if self.phase != Phase::Running {
            return events;
        }

        self.acc_ms = self.acc_ms.saturating_add(elapsed_ms);
        while self.acc_ms >= self.tick_ms {
            self.acc_ms -= self.tick_ms;
            self.step_into(&mut events);
            if self.phase != Phase::Running {
                break;
            }
        }
        events
    }

    /// Execute exactly one simulation step (test and bench entry point).
    pub fn step(&mut self) -> Events {
        let mut events = Events::new();
        if self.phase == Phase::Running {
            self.step_into(&mut events);
        }
        events
    }

    fn step_into(&mut self, events: &mut Events) {
        self.dir = self.pending_dir;

        let head = self.head();
        let next = if self.wrap {
            head.step_wrapped(self.dir)
        } else {
            head.step(self.dir)
        };

        if !self.wrap && !next.in_bounds() {
            self.finish(events);
            return;
        }

        // Checked against the pre-growth body: entering the tail cell is
        // death even though the tail would vacate on a non-growth move.
        if self.snake.contains(&next) {
            self.finish(events);
            return;
        }

        self.snake.push_back(next);
        self.turn_locked = false;

        if next == self.food {
            self.score += 1;
            let _ = events.try_push(GameEvent::AteFood);
            self.tick_ms = self.tick_ms.saturating_sub(TICK_STEP_MS).max(TICK_FLOOR_MS);
            if !self.place_food() {
                // The snake covers the whole grid; the game is complete.
                self.finish(events);
            }
        } else {
            self.snake.pop_front();
        }
    }

    /// Transition to GameOver and settle the best score.
    fn finish(&mut self, events: &mut Events) {
        self.phase = Phase::GameOver;
        let new_best = self.score > self.best;
        if new_best {
            self.best = self.score;
        }
        let _ = events.try_push(GameEvent::GameOver { new_best });
    }

    /// Place food on a uniformly random cell not occupied by the snake.
    ///
    /// Rejection sampling, with a bounded attempt count and a scan fallback
    /// so a near-full board cannot stall the step. Returns false only when
    /// no free cell exists.
    fn place_food(&mut self) -> bool {
        let cells = (GRID_SIZE as usize) * (GRID_SIZE as usize);
        if self.snake.len() >= cells {
            return false;
        }

        for _ in 0..FOOD_SAMPLE_ATTEMPTS {
            let p = Point::new(
                self.rng.next_range(GRID_SIZE as u32) as i16,
                self.rng.next_range(GRID_SIZE as u32) as i16,
            );
            if !self.snake.contains(&p) {
                self.food = p;
                return true;
            }
        }

        // Scan from a random offset so the fallback stays unbiased-ish.
        let start = self.rng.next_range(cells as u32) as usize;
        for i in 0..cells {
            let idx = (start + i) % cells;
            let p = Point::new(
                (idx % GRID_SIZE as usize) as i16,
                (idx / GRID_SIZE as usize) as i16,
            );
            if !self.snake.contains(&p) {
                self.food = p;
                return true;
            }
        }
        false
    }

    /// Write the render snapshot into an existing buffer (allocation-free).
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid = [[CELL_EMPTY; GRID_SIZE as usize]; GRID_SIZE as usize];
        out.grid[self.food.y as usize][self.food.x as usize] = CELL_FOOD;
        for p in &self.snake {
            out.grid[p.y as usize][p.x as usize] = CELL_BODY;
        }
        let head = self.head();
        out.grid[head.y as usize][head.x as usize] = CELL_HEAD;

        out.head = head;
        out.direction = self.dir;
        out.phase = self.phase;
        out.score = self.score;
        out.best = self.best;
        out.tick_ms = self.tick_ms;
        out.wrap = self.wrap;
        out.sound = self.sound;
        out.seed = self.seed;
    }

    /// Convenience snapshot constructor.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    #[cfg(test)]
    pub(crate) fn set_food(&mut self, food: Point) {
        self.food = food;
    }

    #[cfg(test)]
    pub(crate) fn set_snake(&mut self, cells: &[Point], dir: Direction) {
        self.snake = cells.iter().copied().collect();
        self.dir = dir;
        self.pending_dir = dir;
        self.turn_locked = false;
    }

    #[cfg(test)]
    pub(crate) fn set_tick_ms(&mut self, tick_ms: u32) {
        self.tick_ms = tick_ms;
    }

    #[cfg(test)]
    pub(crate) fn place_food_for_test(&mut self) -> bool {
        self.place_food()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_game(seed: u32) -> GameState {
        let mut state = GameState::new(seed);
        state.start();
        state
    }

    /// Park the food somewhere the straight-moving snake will not reach.
    fn park_food(state: &mut GameState) {
        state.set_food(Point::new(0, 0));
    }

    #[test]
    fn new_game_is_idle_with_centered_snake_moving_right() {
        let state = GameState::new(12345);

        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.score(), 0);
        assert_eq!(state.best(), 0);
        assert_eq!(state.tick_ms(), TICK_START_MS);
        assert_eq!(state.direction(), Direction::Right);
        assert!(!state.wrap());
        assert!(!state.sound());

        let mid = GRID_SIZE / 2;
        let cells: Vec<Point> = state.snake().iter().copied().collect();
        assert_eq!(
            cells,
            vec![
                Point::new(mid - 2, mid),
                Point::new(mid - 1, mid),
                Point::new(mid, mid),
            ]
        );
        assert_eq!(state.head(), Point::new(mid, mid));
    }

    #[test]
    fn food_is_in_bounds_and_off_the_snake_at_creation() {
        for seed in 1..50 {
            let state = GameState::new(seed);
            assert!(state.food().in_bounds());
            assert!(!state.snake().contains(&state.food()), "seed {seed}");
        }
    }

    #[test]
    fn start_only_leaves_idle_or_paused() {
        let mut state = GameState::new(1);
        assert!(state.start());
        assert_eq!(state.phase(), Phase::Running);
        assert!(!state.start());

        state.apply_action(GameAction::Pause);
        assert_eq!(state.phase(), Phase::Paused);
        assert!(state.start());
        assert_eq!(state.phase(), Phase::Running);
    }

    #[test]
    fn step_advances_head_and_keeps_length_without_food() {
        let mut state = running_game(1);
        park_food(&mut state);
        let mid = GRID_SIZE / 2;

        let events = state.step();
        assert!(events.is_empty());
        assert_eq!(state.head(), Point::new(mid + 1, mid));
        assert_eq!(state.snake().len(), 3);
        // Tail cell was vacated.
        assert_eq!(state.snake().front(), Some(&Point::new(mid - 1, mid)));
    }

    #[test]
    fn eating_food_grows_scores_and_speeds_up() {
        let mut state = running_game(1);
        let mid = GRID_SIZE / 2;
        state.set_food(Point::new(mid + 1, mid));

        let events = state.step();
        assert_eq!(events.as_slice(), &[GameEvent::AteFood]);
        assert_eq!(state.score(), 1);
        assert_eq!(state.snake().len(), 4);
        assert_eq!(state.tick_ms(), TICK_START_MS - TICK_STEP_MS);
        // Replacement food is off the snake.
        assert!(!state.snake().contains(&state.food()));
        assert!(state.food().in_bounds());
    }

    #[test]
    fn tick_interval_never_drops_below_the_floor() {
        let mut state = running_game(1);
        let mid = GRID_SIZE / 2;

        state.set_tick_ms(TICK_FLOOR_MS + 2);
        state.set_food(Point::new(mid + 1, mid));
        state.step();
        assert_eq!(state.tick_ms(), TICK_FLOOR_MS);

        state.set_food(Point::new(mid + 2, mid));
        state.step();
        assert_eq!(state.tick_ms(), TICK_FLOOR_MS);
    }

    #[test]
    fn reversal_requests_are_always_rejected() {
        let mut state = running_game(1);
        assert!(!state.queue_turn(Direction::Left));
        assert_eq!(state.direction(), Direction::Right);

        park_food(&mut state);
        state.step();
        assert!(!state.queue_turn(Direction::Left));
    }

    #[test]
    fn turn_lock_holds_until_the_next_step() {
        let mut state = running_game(1);
        park_food(&mut state);

        assert!(state.queue_turn(Direction::Up));
        // Locked: a second turn inside the same tick is ignored, which is
        // what blocks a reversal-through-a-corner.
        assert!(!state.queue_turn(Direction::Left));

        state.step();
        assert_eq!(state.direction(), Direction::Up);
        assert!(state.queue_turn(Direction::Left));
    }

    #[test]
    fn same_direction_request_still_consumes_the_lock() {
        let mut state = running_game(1);
        assert!(state.queue_turn(Direction::Right));
        assert!(!state.queue_turn(Direction::Up));
    }

    #[test]
    fn hitting_the_right_wall_ends_the_game() {
        let mut state = running_game(1);
        park_food(&mut state);
        state.set_snake(
            &[
                Point::new(GRID_SIZE - 3, 5),
                Point::new(GRID_SIZE - 2, 5),
                Point::new(GRID_SIZE - 1, 5),
            ],
            Direction::Right,
        );

        let events = state.step();
        assert_eq!(state.phase(), Phase::GameOver);
        assert_eq!(
            events.as_slice(),
            &[GameEvent::GameOver { new_best: false }]
        );
        // Snake is unchanged by the fatal step.
        assert_eq!(state.snake().len(), 3);
    }

    #[test]
    fn left_wall_at_negative_x_ends_the_game() {
        let mut state = running_game(1);
        park_food(&mut state);
        state.set_snake(
            &[Point::new(2, 5), Point::new(1, 5), Point::new(0, 5)],
            Direction::Left,
        );

        state.step();
        assert_eq!(state.phase(), Phase::GameOver);
    }

    #[test]
    fn wrap_mode_crosses_the_edge_instead_of_dying() {
        let mut state = running_game(1);
        park_food(&mut state);
        state.apply_action(GameAction::ToggleWrap);
        state.set_snake(
            &[
                Point::new(GRID_SIZE - 3, 5),
                Point::new(GRID_SIZE - 2, 5),
                Point::new(GRID_SIZE - 1, 5),
            ],
            Direction::Right,
        );

        state.step();
        assert_eq!(state.phase(), Phase::Running);
        assert_eq!(state.head(), Point::new(0, 5));
    }

    #[test]
    fn wrap_mode_keeps_the_head_in_bounds_forever() {
        let mut state = running_game(1);
        state.apply_action(GameAction::ToggleWrap);

        for _ in 0..200 {
            state.step();
            assert!(state.head().in_bounds());
            assert_eq!(state.phase(), Phase::Running);
        }
    }

    #[test]
    fn moving_onto_the_tail_cell_is_death() {
        let mut state = running_game(1);
        park_food(&mut state);
        // 2x2 loop: the next head cell is the current tail. The tail would
        // vacate on a non-growth move, but it still counts as a collision.
        state.set_snake(
            &[
                Point::new(5, 5), // tail
                Point::new(6, 5),
                Point::new(6, 6),
                Point::new(5, 6), // head
            ],
            Direction::Up,
        );

        state.step();
        assert_eq!(state.phase(), Phase::GameOver);
    }

    #[test]
    fn running_into_the_body_is_death() {
        let mut state = running_game(1);
        park_food(&mut state);
        // Hook shape: head at (5,6) moving up into (5,5), which is mid-body.
        state.set_snake(
            &[
                Point::new(3, 5),
                Point::new(4, 5),
                Point::new(5, 5),
                Point::new(6, 5),
                Point::new(6, 6),
                Point::new(5, 6),
            ],
            Direction::Up,
        );

        state.step();
        assert_eq!(state.phase(), Phase::GameOver);
    }

    #[test]
    fn best_updates_only_when_score_strictly_exceeds_it() {
        // Lower final score: best is untouched.
        let mut state = running_game(1);
        park_food(&mut state);
        state.set_best(3);
        state.set_snake(&[Point::new(GRID_SIZE - 1, 5)], Direction::Right);
        let events = state.step();
        assert_eq!(state.best(), 3);
        assert_eq!(
            events.as_slice(),
            &[GameEvent::GameOver { new_best: false }]
        );

        // Higher final score: best follows and the event says to persist.
        let mut state = running_game(1);
        state.set_best(3);
        let mid = GRID_SIZE / 2;
        for i in 1..=5 {
            state.set_food(Point::new(mid + i, mid));
            assert_eq!(state.step().as_slice(), &[GameEvent::AteFood]);
        }
        assert_eq!(state.score(), 5);
        park_food(&mut state);
        state.set_snake(&[Point::new(GRID_SIZE - 1, 5)], Direction::Right);
        let events = state.step();
        assert_eq!(state.best(), 5);
        assert_eq!(events.as_slice(), &[GameEvent::GameOver { new_best: true }]);
    }

    #[test]
    fn equal_score_does_not_update_best() {
        let mut state = running_game(1);
        park_food(&mut state);
        let mid = GRID_SIZE / 2;
        state.set_best(1);
        state.set_food(Point::new(mid + 1, mid));
        state.step();
        assert_eq!(state.score(), 1);

        state.set_snake(&[Point::new(0, 5)], Direction::Left);
        park_food(&mut state);
        let events = state.step();
        assert_eq!(state.best(), 1);
        assert_eq!(
            events.as_slice(),
            &[GameEvent::GameOver { new_best: false }]
        );
    }

    #[test]
    fn tick_accumulator_runs_multiple_steps_after_a_long_frame() {
        let mut state = running_game(1);
        park_food(&mut state);
        let mid = GRID_SIZE / 2;

        // 300ms at 140ms per step = 2 steps, 20ms left over.
        state.tick(300);
        assert_eq!(state.head(), Point::new(mid + 2, mid));

        // The leftover 20ms plus 120ms crosses the next boundary once.
        state.tick(120);
        assert_eq!(state.head(), Point::new(mid + 3, mid));
    }

    #[test]
    fn tick_does_nothing_when_idle_paused_or_over() {
        let mut state = GameState::new(1);
        park_food(&mut state);
        let head = state.head();

        assert!(state.tick(10_000).is_empty());
        assert_eq!(state.head(), head);

        state.start();
        state.apply_action(GameAction::Pause);
        assert!(state.tick(10_000).is_empty());
        assert_eq!(state.head(), head);

        // Paused time is not simulated: resuming starts from a clean slate.
        state.apply_action(GameAction::Pause);
        assert_eq!(state.phase(), Phase::Running);
        assert!(state.tick(10).is_empty());
        assert_eq!(state.head(), head);
    }

    #[test]
    fn pause_toggles_only_between_running_and_paused() {
        let mut state = GameState::new(1);
        assert!(!state.apply_action(GameAction::Pause));
        assert_eq!(state.phase(), Phase::Idle);

        state.start();
        assert!(state.apply_action(GameAction::Pause));
        assert_eq!(state.phase(), Phase::Paused);
        assert!(state.apply_action(GameAction::Pause));
        assert_eq!(state.phase(), Phase::Running);
    }

    #[test]
    fn restart_resets_the_game_but_keeps_best_and_toggles() {
        let mut state = running_game(1);
        let mid = GRID_SIZE / 2;
        state.apply_action(GameAction::ToggleWrap);
        state.apply_action(GameAction::ToggleSound);
        state.set_best(7);
        state.set_food(Point::new(mid + 1, mid));
        state.step();
        assert_eq!(state.score(), 1);

        state.restart(99);
        assert_eq!(state.phase(), Phase::Running);
        assert_eq!(state.score(), 0);
        assert_eq!(state.tick_ms(), TICK_START_MS);
        assert_eq!(state.snake().len(), START_LENGTH);
        assert_eq!(state.best(), 7);
        assert!(state.wrap());
        assert!(state.sound());
        assert_eq!(state.seed(), 99);
    }

    #[test]
    fn lifecycle_actions_are_inert_in_apply_action() {
        let mut state = GameState::new(1);
        assert!(!state.apply_action(GameAction::Start));
        assert!(!state.apply_action(GameAction::Restart));
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn turns_are_ignored_outside_running() {
        let mut state = GameState::new(1);
        assert!(!state.queue_turn(Direction::Up));

        state.start();
        state.apply_action(GameAction::Pause);
        assert!(!state.queue_turn(Direction::Up));
    }

    #[test]
    fn length_grows_by_exactly_one_per_food() {
        let mut state = running_game(1);
        let mid = GRID_SIZE / 2;
        for i in 1..=8 {
            let before = state.snake().len();
            state.set_food(Point::new(mid + i, mid));
            state.step();
            assert_eq!(state.snake().len(), before + 1);
            assert_eq!(state.score() as usize, before + 1 - START_LENGTH);
        }
    }

    #[test]
    fn replacement_food_never_lands_on_the_snake() {
        let mut state = running_game(42);
        let mid = GRID_SIZE / 2;
        for i in 1..=10 {
            state.set_food(Point::new(mid + i, mid));
            state.step();
            assert!(!state.snake().contains(&state.food()));
        }
    }

    #[test]
    fn place_food_scan_fallback_finds_the_last_free_cell() {
        let mut state = GameState::new(1);
        let gap = Point::new(7, 7);
        let cells: Vec<Point> = (0..GRID_SIZE)
            .flat_map(|y| (0..GRID_SIZE).map(move |x| Point::new(x, y)))
            .filter(|&p| p != gap)
            .collect();
        state.set_snake(&cells, Direction::Right);

        assert!(state.place_food_for_test());
        assert_eq!(state.food(), gap);
    }

    #[test]
    fn full_board_ends_the_game_on_the_final_bite() {
        let mut state = running_game(1);
        // Snake occupies everything except (0,0); head at (1,0) moving left
        // onto the food fills the board.
        let cells: Vec<Point> = (0..GRID_SIZE)
            .flat_map(|y| (0..GRID_SIZE).map(move |x| Point::new(x, y)))
            .filter(|&p| p != Point::new(0, 0) && p != Point::new(1, 0))
            .chain([Point::new(1, 0)])
            .collect();
        state.set_snake(&cells, Direction::Left);
        state.set_food(Point::new(0, 0));

        let events = state.step();
        assert_eq!(state.phase(), Phase::GameOver);
        assert_eq!(
            events.as_slice(),
            &[GameEvent::AteFood, GameEvent::GameOver { new_best: true }]
        );
        assert_eq!(state.snake().len(), (GRID_SIZE * GRID_SIZE) as usize);
    }

    #[test]
    fn snake_cells_stay_distinct_while_alive() {
        let mut state = running_game(7);
        for _ in 0..60 {
            if state.phase() != Phase::Running {
                break;
            }
            state.step();
            let mut seen = std::collections::HashSet::new();
            for p in state.snake() {
                assert!(seen.insert(*p), "duplicate cell {p:?}");
            }
        }
    }

    #[test]
    fn snapshot_marks_head_body_and_food() {
        let mut state = running_game(1);
        park_food(&mut state);
        let snap = state.snapshot();

        assert_eq!(snap.count(CELL_HEAD), 1);
        assert_eq!(snap.count(CELL_BODY), START_LENGTH - 1);
        assert_eq!(snap.count(CELL_FOOD), 1);
        assert_eq!(snap.cell(snap.head.x, snap.head.y), CELL_HEAD);
        assert_eq!(snap.cell(0, 0), CELL_FOOD);
        assert_eq!(snap.phase, Phase::Running);
        assert_eq!(snap.tick_ms, TICK_START_MS);
    }

    #[test]
    fn same_seed_produces_identical_games() {
        let mut a = running_game(777);
        let mut b = running_game(777);
        a.apply_action(GameAction::ToggleWrap);
        b.apply_action(GameAction::ToggleWrap);

        for _ in 0..300 {
            a.step();
            b.step();
            assert_eq!(a.head(), b.head());
            assert_eq!(a.food(), b.food());
            assert_eq!(a.score(), b.score());
        }
    }
}
