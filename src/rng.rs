//! Deterministic random number generation for tile spawning.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same game
//! - **Reproducible**: The seed is kept and can be read back to replay a run
//! - **Substitutable**: Sessions accept any pre-built generator for tests
//!
//! ## Usage
//!
//! ```
//! use twenty48::TileRng;
//!
//! let mut rng = TileRng::new(42);
//! let mut replay = TileRng::new(42);
//!
//! // Same seed, same stream
//! assert_eq!(rng.one_in(10), replay.one_in(10));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG behind every tile spawn.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
/// The seed is stored so an entropy-seeded session can still report how to
/// reproduce itself.
#[derive(Clone, Debug)]
pub struct TileRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl TileRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the OS entropy pool.
    ///
    /// The drawn seed is retained, so a game started this way can still be
    /// replayed later via [`TileRng::new`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Choose a random element from a slice.
    ///
    /// Returns `None` if the slice is empty.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Roll a chance of exactly 1 in `n`.
    ///
    /// `n` must be non-zero.
    pub fn one_in(&mut self, n: u32) -> bool {
        self.inner.gen_ratio(1, n)
    }
}
