//! Python bindings
//!
//! Exposed as the `progen_rng_core_rs` extension module when the `pyo3`
//! feature is enabled.

pub mod generator;
