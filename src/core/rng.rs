//! Seedable random number generation for dice.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical rolls
//! - **Context streams**: Independent named sub-streams (`"die-1"`, `"die-2"`)
//!   derived from one session seed
//!
//! ## Usage
//!
//! ```
//! use space_race::core::GameRng;
//!
//! let session = GameRng::new(42);
//! let mut first = session.for_context("die-1");
//! let mut second = session.for_context("die-2");
//!
//! let face = first.roll_d6();
//! assert!((1..=6).contains(&face));
//! let _ = second.roll_d6();
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Deterministic RNG backing the dice.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system's entropy source.
    ///
    /// The chosen seed is kept, so `seed()` still reports it.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this generator was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);

        Self::new(hasher.finish())
    }

    /// Roll a six-sided die, uniform over 1..=6.
    pub fn roll_d6(&mut self) -> u8 {
        self.inner.gen_range(1..=6)
    }
}
