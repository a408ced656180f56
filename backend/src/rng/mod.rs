//! Deterministic random value generation
//!
//! A PCG-64 [`Engine`] owned by the caller, generator variants that draw from
//! it through the [`RandomGenerator`] trait, and a factory that reseeds the
//! engine before handing out a generator.
//!
//! CRITICAL: All randomness consumed during generation MUST go through an
//! engine from this module, otherwise a seed no longer reproduces a run.

mod checkpoint;
mod digits;
mod engine;
mod factory;
mod generator;

pub use checkpoint::EngineSnapshot;
pub use digits::{random_digits, random_hex_digits, DEC_DIGITS, HEX_DIGITS};
pub use engine::Engine;
#[cfg(feature = "pyo3")]
pub(crate) use factory::construct;
pub use factory::{make_generator, make_generator_from_id};
pub use generator::{DefaultGenerator, DepthFirstGenerator, GeneratorKind, RandomGenerator};
