//! Input handling - keyboard mapping and mouse swipe detection.
//!
//! Both sources reduce to [`GameAction`](tui_snake_types::GameAction)s so
//! the core never knows which device steered the snake.

pub mod map;
pub mod swipe;

pub use map::{handle_key_event, should_quit};
pub use swipe::SwipeDetector;

pub use tui_snake_types as types;
