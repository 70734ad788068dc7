//! RNG module - deterministic board shuffling
//!
//! A small LCG drives the two region permutations at board generation time.
//! The reference implementation shuffled with a random sort comparator,
//! which is not guaranteed uniform; here an explicit Fisher-Yates shuffle
//! is used instead. Seedable so that tests can reproduce exact boards.

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

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod 2^32, a=1664525, c=1013904223
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice in place using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// A shuffled permutation of `1..=count`.
    ///
    /// This is exactly what one tile region receives at generation time.
    pub fn permutation(&mut self, count: u8) -> Vec<u8> {
        let mut values: Vec<u8> = (1..=count).collect();
        self.shuffle(&mut values);
        values
    }
}
