//! Generator kinds and the shared generator interface
//!
//! A generator is a thin handle over a caller-owned [`Engine`]. It holds no
//! random state of its own: every draw advances the borrowed engine, and
//! dropping the handle leaves the engine exactly where the last draw left it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::digits::{self, DEC_DIGITS, HEX_DIGITS};
use super::engine::Engine;
use crate::error::RngError;

/// Selectable generator variants
///
/// Closed set: adding a variant means extending this enum, its id mapping,
/// and the factory dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorKind {
    /// Straight sampling from the seeded sequence
    #[default]
    Default,
    /// Depth-first exploration of the caller's choice space
    DepthFirst,
}

impl GeneratorKind {
    /// All kinds, in id order
    pub const ALL: [GeneratorKind; 2] = [GeneratorKind::Default, GeneratorKind::DepthFirst];

    /// Stable numeric selector for this kind
    pub fn id(self) -> u32 {
        match self {
            GeneratorKind::Default => 0,
            GeneratorKind::DepthFirst => 1,
        }
    }

    /// Map a numeric selector back to a kind
    pub fn from_id(id: u32) -> Result<Self, RngError> {
        match id {
            0 => Ok(GeneratorKind::Default),
            1 => Ok(GeneratorKind::DepthFirst),
            other => Err(RngError::UnknownKind(other)),
        }
    }

    /// Stable snake_case name, matching the serde representation
    pub fn name(self) -> &'static str {
        match self {
            GeneratorKind::Default => "default",
            GeneratorKind::DepthFirst => "depth_first",
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GeneratorKind {
    type Err = RngError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GeneratorKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| RngError::InvalidKindName(s.to_string()))
    }
}

/// Capability set shared by every generator variant
///
/// Implementors only provide [`kind`](RandomGenerator::kind) and access to
/// the borrowed engine; the draw and string operations are common.
///
/// # Example
/// ```
/// use progen_rng_core_rs::rng::{make_generator, GeneratorKind, RandomGenerator};
/// use progen_rng_core_rs::Engine;
///
/// let mut engine = Engine::new(0);
/// let mut gen = make_generator(GeneratorKind::Default, 42, &mut engine);
///
/// let id = gen.random_hex_digits(8);
/// assert_eq!(id.len(), 8);
/// assert_eq!(gen.decimal_alphabet(), "0123456789");
/// ```
pub trait RandomGenerator {
    /// Which variant this is
    fn kind(&self) -> GeneratorKind;

    /// The engine all randomness is drawn from
    fn engine(&mut self) -> &mut Engine;

    /// Draw one value uniformly over the full `u64` range
    fn next(&mut self) -> u64 {
        self.engine().draw()
    }

    /// Exactly `count` characters from `0-9A-F`, one draw each
    fn random_hex_digits(&mut self, count: usize) -> String {
        digits::random_hex_digits(self.engine(), count)
    }

    /// Exactly `count` characters from `0-9`, one draw each
    fn random_digits(&mut self, count: usize) -> String {
        digits::random_digits(self.engine(), count)
    }

    /// The hex table, without drawing
    fn hex_alphabet(&self) -> &'static str {
        HEX_DIGITS
    }

    /// The decimal table, without drawing
    fn decimal_alphabet(&self) -> &'static str {
        DEC_DIGITS
    }
}

/// Default variant
///
/// Keeps the seed it was built for so callers can report it alongside the
/// generated artifact.
#[derive(Debug)]
pub struct DefaultGenerator<'e> {
    engine: &'e mut Engine,
    seed: u64,
}

impl<'e> DefaultGenerator<'e> {
    pub fn new(engine: &'e mut Engine, seed: u64) -> Self {
        Self { engine, seed }
    }

    /// Seed this generator was constructed with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomGenerator for DefaultGenerator<'_> {
    fn kind(&self) -> GeneratorKind {
        GeneratorKind::Default
    }

    fn engine(&mut self) -> &mut Engine {
        self.engine
    }
}

/// Depth-first variant
#[derive(Debug)]
pub struct DepthFirstGenerator<'e> {
    engine: &'e mut Engine,
}

impl<'e> DepthFirstGenerator<'e> {
    pub fn new(engine: &'e mut Engine) -> Self {
        Self { engine }
    }
}

impl RandomGenerator for DepthFirstGenerator<'_> {
    fn kind(&self) -> GeneratorKind {
        GeneratorKind::DepthFirst
    }

    fn engine(&mut self) -> &mut Engine {
        self.engine
    }
}
