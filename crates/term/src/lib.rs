//! Terminal rendering layer.
//!
//! Renders into a plain framebuffer that is diffed and flushed to a
//! crossterm backend, instead of going through a widget/layout library.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Precise control over aspect ratio (2 columns per grid cell)
//! - One syscall per frame on the flush path

pub mod fb;
pub mod feedback;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use feedback::Feedback;
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
