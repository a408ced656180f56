//! PCG-64 backed numeric engine
//!
//! The engine is an explicit value owned by whoever drives a generation
//! session. Every draw routes through `&mut self`, so a single owner is
//! enforced by the borrow checker rather than by convention.
//!
//! # Determinism
//!
//! Same seed → same sequence of draws, on every platform. This is what makes
//! a generated artifact reproducible from the seed that produced it.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64;

use crate::error::RngError;
use crate::platform::generate_seed;

/// Seeded deterministic generator producing uniform `u64` draws
///
/// # Example
/// ```
/// use progen_rng_core_rs::Engine;
///
/// let mut engine = Engine::new(42);
/// let first = engine.draw();
///
/// engine.reseed(42);
/// assert_eq!(engine.draw(), first);
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    /// Seed of the current sequence
    seed: u64,
    /// Draws taken since the last (re)seed
    draws: u64,
    inner: Pcg64,
}

impl Engine {
    /// Create an engine already seeded with `seed`
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            draws: 0,
            inner: Pcg64::seed_from_u64(seed),
        }
    }

    /// Create an engine seeded from the OS entropy source
    ///
    /// The seed is available afterwards through [`Engine::seed`], so the run
    /// can still be reproduced.
    pub fn from_entropy() -> Result<Self, RngError> {
        Ok(Self::new(generate_seed()?))
    }

    /// Reinitialize the sequence from `seed`
    ///
    /// Resets the draw counter. Two reseeds with the same value yield
    /// identical subsequent draws.
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.draws = 0;
        self.inner = Pcg64::seed_from_u64(seed);
    }

    /// Draw one value uniformly over the full `u64` range
    ///
    /// Advances the internal state exactly once.
    pub fn draw(&mut self) -> u64 {
        self.draws = self.draws.wrapping_add(1);
        self.inner.next_u64()
    }

    /// Seed of the current sequence
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of draws taken since the last (re)seed
    ///
    /// Wraps after 2^64 draws, so a snapshot taken past that point restores
    /// to the wrong position.
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Rebuild an engine positioned `draws` steps after `seed`
    ///
    /// PCG can jump ahead in logarithmic time, so this does not replay the
    /// skipped draws.
    pub(crate) fn at_position(seed: u64, draws: u64) -> Self {
        let mut engine = Self::new(seed);
        engine.inner.advance(u128::from(draws));
        engine.draws = draws;
        engine
    }
}
