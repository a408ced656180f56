//! Error types for the random-value core
//!
//! Recoverable failures surface as [`RngError`]. Two paths deliberately do not
//! use it: an unknown generator id at the factory boundary aborts the process,
//! and directory creation collapses every failure into a `bool`.

use thiserror::Error;

/// Errors that can occur while configuring or restoring random generators
#[derive(Debug, Error, PartialEq)]
pub enum RngError {
    #[error("Unknown generator kind id: {0}")]
    UnknownKind(u32),

    #[error("Unknown generator kind name: '{0}'")]
    InvalidKindName(String),

    #[error("OS entropy source failed: {0}")]
    Entropy(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Snapshot checksum mismatch: expected {expected}, got {actual}")]
    SnapshotMismatch { expected: String, actual: String },
}
