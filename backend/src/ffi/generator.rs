//! PyO3 wrapper for seeded generators
//!
//! A Python `Generator` owns its engine outright, so independent Python
//! objects never share a sequence.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::error::RngError;
use crate::platform;
use crate::rng::{construct, Engine, GeneratorKind, RandomGenerator, DEC_DIGITS, HEX_DIGITS};

fn to_py_err(err: RngError) -> PyErr {
    match err {
        RngError::Entropy(msg) => PyRuntimeError::new_err(msg),
        other => PyValueError::new_err(other.to_string()),
    }
}

/// Python wrapper for a seeded generator
///
/// # Example (from Python)
///
/// ```python
/// from progen_rng_core_rs import Generator
///
/// gen = Generator("depth_first", 42)
/// print(gen.random_hex_digits(8))
/// ```
#[pyclass(name = "Generator")]
pub struct PyGenerator {
    engine: Engine,
    kind: GeneratorKind,
    seed: u64,
}

impl PyGenerator {
    fn handle(&mut self) -> Box<dyn RandomGenerator + '_> {
        construct(self.kind, self.seed, &mut self.engine)
    }
}

#[pymethods]
impl PyGenerator {
    /// Create a generator; without a seed one is drawn from OS entropy
    ///
    /// Raises ValueError for an unknown kind name.
    #[new]
    #[pyo3(signature = (kind = "default", seed = None))]
    fn new(kind: &str, seed: Option<u64>) -> PyResult<Self> {
        let kind: GeneratorKind = kind.parse().map_err(to_py_err)?;
        let seed = match seed {
            Some(seed) => seed,
            None => platform::generate_seed().map_err(to_py_err)?,
        };

        Ok(PyGenerator {
            engine: Engine::new(seed),
            kind,
            seed,
        })
    }

    /// Restart the sequence from `seed`
    fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.engine.reseed(seed);
    }

    #[getter]
    fn kind(&self) -> &'static str {
        self.kind.name()
    }

    #[getter]
    fn seed(&self) -> u64 {
        self.seed
    }

    fn next(&mut self) -> u64 {
        self.handle().next()
    }

    fn random_hex_digits(&mut self, count: usize) -> String {
        self.handle().random_hex_digits(count)
    }

    fn random_digits(&mut self, count: usize) -> String {
        self.handle().random_digits(count)
    }

    fn hex_alphabet(&self) -> &'static str {
        HEX_DIGITS
    }

    fn decimal_alphabet(&self) -> &'static str {
        DEC_DIGITS
    }
}

/// Fresh seed from OS entropy
#[pyfunction]
pub fn generate_seed() -> PyResult<u64> {
    platform::generate_seed().map_err(to_py_err)
}
