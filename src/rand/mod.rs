//! Randomness sources for password generation.
//!
//! [`RandomSource`] is the single capability the generator draws from. It is
//! owned by exactly one generator and advanced sequentially; two sources
//! built from the same [`Seed`] yield the same stream.

mod seed;

use rand::rngs::{OsRng, StdRng};
use rand::rand_core::UnwrapErr;
use rand::{RngCore, SeedableRng, TryRngCore};

pub use seed::{Seed, SeedSpec};

pub enum RandomSource {
    /// Reproducible stream fixed by its seed.
    Deterministic(StdRng),
    /// Operating-system entropy, never reproducible.
    Secure(UnwrapErr<OsRng>),
}

impl RandomSource {
    pub fn deterministic(seed: &Seed) -> Self {
        RandomSource::Deterministic(StdRng::from_seed(seed.to_rng_seed()))
    }

    /// Seedable generator with an unpredictable seed.
    pub fn from_entropy() -> Self {
        RandomSource::Deterministic(StdRng::from_os_rng())
    }

    pub fn secure() -> Self {
        RandomSource::Secure(OsRng.unwrap_err())
    }

    pub fn is_reproducible(&self) -> bool {
        matches!(self, RandomSource::Deterministic(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            RandomSource::Deterministic(_) => "deterministic",
            RandomSource::Secure(_) => "secure",
        }
    }
}

impl std::fmt::Debug for RandomSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RandomSource({})", self.name())
    }
}

impl RngCore for RandomSource {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        match self {
            RandomSource::Deterministic(rng) => rng.next_u32(),
            RandomSource::Secure(rng) => rng.next_u32(),
        }
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        match self {
            RandomSource::Deterministic(rng) => rng.next_u64(),
            RandomSource::Secure(rng) => rng.next_u64(),
        }
    }

    #[inline]
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        match self {
            RandomSource::Deterministic(rng) => rng.fill_bytes(dst),
            RandomSource::Secure(rng) => rng.fill_bytes(dst),
        }
    }
}
