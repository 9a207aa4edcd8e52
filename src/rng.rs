//! Random number generation for the monster engine.
//!
//! Wraps a seeded ChaCha RNG so that a whole game is reproducible from a
//! single seed. The engine never seeds itself; the caller decides between
//! [`GameRng::new`] (deterministic) and [`GameRng::from_entropy`].

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Game random number generator.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create an RNG from an explicit seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG with a random seed.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform draw in `0..n`. Returns 0 if `n` is 0.
    pub fn rn2(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Uniform draw in `1..=n`, a die roll. Returns 0 if `n` is 0.
    pub fn rnd(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(1..=n)
    }

    /// Returns true with probability `percent`/100.
    pub fn percent(&mut self, percent: u32) -> bool {
        self.rn2(100) < percent
    }
}
