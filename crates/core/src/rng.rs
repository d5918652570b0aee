//! RNG module - seedable randomness for shape and color selection
//!
//! The engine never touches a global random source. It is handed a [`RandomSource`],
//! which in production is a [`SimpleRng`] seeded from the clock and in tests a fixed
//! seed, so every game can be replayed exactly.

use crate::types::{Rgb, ShapeKind};

/// Source of uniformly distributed 32-bit values
pub trait RandomSource {
    /// Generate next random u32
    fn next_u32(&mut self) -> u32;

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits of `next_u32`, which are the well-mixed ones for an LCG.
    fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

/// Pick one of the five shape kinds uniformly
pub fn random_shape_kind(rng: &mut impl RandomSource) -> ShapeKind {
    ShapeKind::ALL[rng.next_range(ShapeKind::ALL.len() as u32) as usize]
}

/// Pick a color with each channel uniform in [0, 255)
pub fn random_color(rng: &mut impl RandomSource) -> Rgb {
    let r = rng.next_range(255) as u8;
    let g = rng.next_range(255) as u8;
    let b = rng.next_range(255) as u8;
    Rgb::new(r, g, b)
}
