//! Audible feedback via the terminal bell.
//!
//! Best effort only: a terminal with the bell muted simply stays quiet, and
//! write failures are swallowed because losing a beep must never kill the
//! game loop.

use std::io::Write;

const BEL: &[u8] = b"\x07";

#[derive(Debug, Default)]
pub struct Feedback;

impl Feedback {
    pub fn new() -> Self {
        Self
    }

    /// Single pulse when food is eaten.
    pub fn food(&self) {
        self.pulse(1);
    }

    /// Double pulse on game over.
    pub fn game_over(&self) {
        self.pulse(2);
    }

    fn pulse(&self, count: usize) {
        let mut out = std::io::stdout();
        for _ in 0..count {
            let _ = out.write_all(BEL);
        }
        let _ = out.flush();
    }
}
