//! Program Generator RNG Core - Rust Engine
//!
//! Deterministic, seedable random values for a program generator.
//!
//! # Architecture
//!
//! - **rng**: Seeded engine, generator variants, factory, checkpoints
//! - **platform**: OS entropy seeds and directory creation
//! - **config**: Serde-loadable generator configuration
//!
//! # Critical Invariants
//!
//! 1. Same seed + same sequence of calls = bit-identical output
//! 2. The factory reseeds before constructing any generator
//! 3. An unknown generator id aborts; it is never defaulted
//!
//! # Example
//! ```
//! use progen_rng_core_rs::{make_generator, Engine, GeneratorKind, RandomGenerator};
//!
//! let mut engine = Engine::new(0);
//! let mut gen = make_generator(GeneratorKind::Default, 42, &mut engine);
//! let label = format!("v_{}", gen.random_hex_digits(6));
//! assert_eq!(label.len(), 8);
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod platform;
pub mod rng;

// Re-exports for convenience
pub use config::GeneratorConfig;
pub use error::RngError;
pub use platform::{create_directory, generate_seed};
pub use rng::{
    make_generator, make_generator_from_id, Engine, EngineSnapshot, GeneratorKind,
    RandomGenerator,
};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn progen_rng_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::generator::PyGenerator>()?;
    m.add_function(wrap_pyfunction!(ffi::generator::generate_seed, m)?)?;
    Ok(())
}
