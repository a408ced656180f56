//! Generator factory
//!
//! Both entry points reseed the engine before anything else, so a generator
//! never observes a stale sequence and the engine is mutated even when
//! construction cannot proceed.

use tracing::{debug, error};

use super::engine::Engine;
use super::generator::{DefaultGenerator, DepthFirstGenerator, GeneratorKind, RandomGenerator};

/// Reseed `engine` with `seed` and build the generator selected by `kind`
///
/// # Example
/// ```
/// use progen_rng_core_rs::rng::{make_generator, GeneratorKind, RandomGenerator};
/// use progen_rng_core_rs::Engine;
///
/// let mut engine = Engine::new(0);
/// let first = make_generator(GeneratorKind::DepthFirst, 42, &mut engine).next();
/// let again = make_generator(GeneratorKind::DepthFirst, 42, &mut engine).next();
/// assert_eq!(first, again);
/// ```
pub fn make_generator(
    kind: GeneratorKind,
    seed: u64,
    engine: &mut Engine,
) -> Box<dyn RandomGenerator + '_> {
    engine.reseed(seed);
    construct(kind, seed, engine)
}

/// Reseed `engine`, then build the generator for a raw numeric selector
///
/// An id outside [`GeneratorKind::ALL`] can only come from a programming
/// error in the caller, so it aborts the process instead of returning.
/// The engine has already been reseeded when that happens.
pub fn make_generator_from_id(
    id: u32,
    seed: u64,
    engine: &mut Engine,
) -> Box<dyn RandomGenerator + '_> {
    engine.reseed(seed);
    match GeneratorKind::from_id(id) {
        Ok(kind) => construct(kind, seed, engine),
        Err(err) => {
            error!(id, seed, %err, "unknown random generator");
            std::process::abort()
        }
    }
}

/// Build the generator for `kind` over `engine` without reseeding
pub(crate) fn construct(
    kind: GeneratorKind,
    seed: u64,
    engine: &mut Engine,
) -> Box<dyn RandomGenerator + '_> {
    debug!(%kind, seed, "constructing random generator");
    match kind {
        GeneratorKind::Default => Box::new(DefaultGenerator::new(engine, seed)),
        GeneratorKind::DepthFirst => Box::new(DepthFirstGenerator::new(engine)),
    }
}
