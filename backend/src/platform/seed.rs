//! Fresh seeds from OS entropy

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::RngError;

/// Read a non-deterministic 64-bit seed from the operating system
///
/// Does not seed anything by itself; pass the result to
/// [`Engine::new`](crate::Engine::new) or the generator factory.
///
/// # Example
/// ```
/// use progen_rng_core_rs::platform::generate_seed;
/// use progen_rng_core_rs::Engine;
///
/// let seed = generate_seed().unwrap();
/// let engine = Engine::new(seed);
/// assert_eq!(engine.seed(), seed);
/// ```
pub fn generate_seed() -> Result<u64, RngError> {
    let mut bytes = [0u8; 8];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| RngError::Entropy(e.to_string()))?;
    Ok(u64::from_le_bytes(bytes))
}
