//! Seeded randomness for field generation.
//!
//! A seed fully determines the stream, so a seed fully determines a field.
//! Not cryptographic.

use crate::{Bounds, Coord};

pub trait DeterministicRng {
    fn next_u64(&mut self) -> u64;

    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Uniform integer in `0..bound`. `bound` must be non-zero.
    fn next_below(&mut self, bound: u32) -> u32 {
        // Multiply-shift; the bias is negligible for grid sizes.
        ((u64::from(self.next_u32()) * u64::from(bound)) >> 32) as u32
    }

    /// Uniform cell inside non-empty `bounds`, x drawn before y.
    fn next_coord(&mut self, bounds: Bounds) -> Coord {
        let x = self.next_below(bounds.width as u32) as i32;
        let y = self.next_below(bounds.height as u32) as i32;
        Coord::new(x, y)
    }
}

/// SplitMix64 generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    const GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl DeterministicRng for SplitMix64 {
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(Self::GAMMA);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}
