//! RNG module - pluggable randomness for bag generation
//!
//! The bag generator only needs three operations: a raw `u32`, a bounded
//! draw and a Fisher-Yates shuffle. [`PieceRng`] captures them so tests can
//! inject scripted sequences while the game ships with [`SimpleRng`].

/// Source of randomness used when dealing a bag.
///
/// Implementors only provide [`next_u32`](PieceRng::next_u32); the bounded
/// draw and the shuffle are derived from it.
pub trait PieceRng: Clone {
    /// Generate next random u32
    fn next_u32(&mut self) -> u32;

    /// Generate random value in range [0, max)
    fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0, "next_range called with empty range");
        self.next_u32() % max.max(1)
    }

    /// Shuffle a slice using Fisher-Yates
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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

    /// Rebuild a generator from a value returned by [`SimpleRng::state`].
    ///
    /// Unlike [`SimpleRng::new`], a zero state is kept as is.
    pub fn from_state(state: u32) -> Self {
        Self { state }
    }

    /// Current internal state; [`SimpleRng::from_state`] resumes the sequence from it
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl PieceRng for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
