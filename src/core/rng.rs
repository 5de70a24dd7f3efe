// Copyright @yucwang 2026

use crate::math::constants::{Float, Vector2f};

/// 64-bit linear congruential generator used to drive sample positions.
pub struct LcgRng {
    state: u64,
}

impl LcgRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Independent generator for one worker or render pass.
    pub fn for_stream(seed: u64, stream: u64) -> Self {
        Self::new(((seed & 0xFFFF_FFFF) << 32) | (stream & 0xFFFF_FFFF))
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (self.state >> 32) as u32
    }

    /// Uniform in `[0, 1)`.
    pub fn next_f32(&mut self) -> Float {
        (self.next_u32() >> 8) as Float * (1.0 / (1u32 << 24) as Float)
    }

    pub fn next_2d(&mut self) -> Vector2f {
        let x = self.next_f32();
        Vector2f::new(x, self.next_f32())
    }
}
