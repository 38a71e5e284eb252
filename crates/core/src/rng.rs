//! RNG module - deterministic xorshift generator
//!
//! Food placement is the only consumer of randomness, so a tiny xorshift32
//! keeps whole games reproducible from a single 32-bit seed. New games are
//! seeded from wall-clock time by the runner; tests inject fixed seeds.

/// Xorshift32 generator (Marsaglia's shift triple 13/17/5).
#[derive(Debug, Clone)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    /// Create a new generator with the given seed.
    pub fn new(seed: u32) -> Self {
        // 0 is the xorshift fixed point and would never advance.
        let state = if seed == 0 { 0x9E37_79B9 } else { seed };
        Self { state }
    }

    /// Generate the next random u32, advancing the state.
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform float in `[0, 1)`.
    pub fn next_f32(&mut self) -> f32 {
        // Keep 24 bits so the result stays exactly representable below 1.0.
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Uniform value in `[0, max)`.
    ///
    /// `max` must be nonzero and small enough for an f32 mantissa; grid
    /// dimensions are far below that.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_f32() * max as f32) as u32
    }

    /// Current internal state (for capturing a replayable seed).
    pub fn state(&self) -> u32 {
        self.state
    }
}
