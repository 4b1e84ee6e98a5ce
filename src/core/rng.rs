//! RNG module - seedable randomness for grid generation
//!
//! A simple LCG keeps the whole game deterministic for a given seed, which is
//! what the tests lean on. Brick layouts and colors are the only consumers.

use crate::types::Rgb;

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
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Maps through the high bits: the low bits of an LCG are weak (this
    /// multiplier is divisible by 25, so small moduli would degenerate).
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Generate random value in range [lo, hi] (inclusive)
    pub fn next_between(&mut self, lo: u32, hi: u32) -> u32 {
        debug_assert!(lo <= hi);
        lo + self.next_range(hi - lo + 1)
    }

    /// Roll a percentage chance in [0, 100]
    pub fn roll_percent(&mut self, percent: u32) -> bool {
        self.next_range(100) < percent
    }

    /// Generate a random opaque color
    pub fn next_color(&mut self) -> Rgb {
        Rgb::new(
            self.next_range(256) as u8,
            self.next_range(256) as u8,
            self.next_range(256) as u8,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_next_between_stays_inclusive() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            let v = rng.next_between(3, 7);
            assert!((3..=7).contains(&v));
        }
    }

    #[test]
    fn test_roll_percent_extremes() {
        let mut rng = SimpleRng::new(42);
        for _ in 0..100 {
            assert!(rng.roll_percent(100));
            assert!(!rng.roll_percent(0));
        }
    }

    #[test]
    fn test_color_sequence_deterministic() {
        let mut rng1 = SimpleRng::new(9);
        let mut rng2 = SimpleRng::new(9);
        for _ in 0..10 {
            assert_eq!(rng1.next_color(), rng2.next_color());
        }
    }
}
