//! RNG module - deterministic shape selection
//!
//! A simple LCG behind a uniform shape picker. Selection policy is not a
//! correctness concern for the rules; uniform matches the reference game, and
//! seeding keeps games reproducible for tests.

use crate::types::ShapeKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
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

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Uniform shape picker over the 7 shapes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapePicker {
    rng: SimpleRng,
}

impl ShapePicker {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next shape
    pub fn next(&mut self) -> ShapeKind {
        let idx = self.rng.next_range(ShapeKind::ALL.len() as u32);
        ShapeKind::ALL[idx as usize]
    }
}
