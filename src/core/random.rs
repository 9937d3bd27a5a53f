//! Deterministic RNG (mulberry32)
//!
//! One 32-bit state word, advanced only by sampling. Two generators built
//! from the same seed produce the same stream on every platform.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rng {
    state: u32,
}

impl Rng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Current state word (the seed before the first draw)
    #[inline]
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Next raw 32-bit output
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6d2b_79f5);
        let t = self.state;
        let mut x = (t ^ (t >> 15)).wrapping_mul(1 | t);
        x ^= x.wrapping_add((x ^ (x >> 7)).wrapping_mul(61 | x));
        x ^ (x >> 14)
    }

    /// Uniform sample in [0, 1)
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / 4_294_967_296.0
    }
}

#[cfg(test)]
#[path = "tests/random_tests.rs"]
mod tests;
