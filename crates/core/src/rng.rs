//! RNG module - small deterministic generator for sample grids
//!
//! The random terrain pattern only needs reproducible uniform integers, so a
//! seeded LCG is enough and keeps `core` free of external crates.

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
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Generate random value in the inclusive range [lo, hi]
    pub fn next_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        debug_assert!(lo <= hi);
        let span = (hi as i64 - lo as i64 + 1) as u32;
        lo + self.next_range(span) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SimpleRng::new(42);
        let mut b = SimpleRng::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_zero_seed_is_not_stuck() {
        let mut rng = SimpleRng::new(0);
        let first = rng.next_u32();
        assert_ne!(first, rng.next_u32());
    }

    #[test]
    fn test_inclusive_range_hits_both_ends() {
        let mut rng = SimpleRng::new(7);
        let mut seen = [false; 21];
        for _ in 0..2000 {
            let v = rng.next_inclusive(0, 20);
            assert!((0..=20).contains(&v));
            seen[v as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
