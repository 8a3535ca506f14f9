//! Deterministic random number generation for dealing.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same deals
//! - **Forkable**: Each deal draws from its own independent stream
//!
//! ```
//! use crazy_eights::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut deal_rng = rng.fork();
//!
//! let mut a = vec![1, 2, 3, 4, 5];
//! deal_rng.shuffle(&mut a);
//! a.sort();
//! assert_eq!(a, vec![1, 2, 3, 4, 5]);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent stream.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Shuffle a slice in place (Fisher–Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shuffled(rng: &mut GameRng) -> Vec<u32> {
        let mut data: Vec<u32> = (0..52).collect();
        rng.shuffle(&mut data);
        data
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..10 {
            assert_eq!(shuffled(&mut rng1), shuffled(&mut rng2));
        }
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = GameRng::new(42);
        let mut forked = rng.fork();

        assert_ne!(shuffled(&mut rng), shuffled(&mut forked));
    }

    #[test]
    fn test_successive_forks_differ() {
        let mut rng = GameRng::new(7);
        let first = rng.fork();
        let second = rng.fork();

        assert_ne!(first.seed(), second.seed());
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        assert_eq!(rng1.fork().seed(), rng2.fork().seed());
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        assert_ne!(data, original);
        data.sort();
        assert_eq!(data, original);
    }
}
