//! Terminal Snake.
//!
//! Facade crate re-exporting the workspace members:
//! - [`types`]: shared constants, grid geometry, actions and events
//! - [`core`]: deterministic game simulation
//! - [`input`]: keyboard mapping and mouse swipe detection
//! - [`term`]: framebuffer renderer and game view
//! - [`store`]: high-score persistence

pub use tui_snake_core as core;
pub use tui_snake_input as input;
pub use tui_snake_store as store;
pub use tui_snake_term as term;
pub use tui_snake_types as types;
