//! Digit tables and random digit strings
//!
//! Each character is chosen by reducing one engine draw modulo the table
//! length. `u64::MAX + 1` is a multiple of 16 but not of 10, so decimal
//! strings lean very slightly toward the lower digits. Callers depend on the
//! exact character sequence for a seed, so the reduction must stay a plain
//! modulo.

use super::engine::Engine;

/// Hexadecimal symbols, indexed by value
pub const HEX_DIGITS: &str = "0123456789ABCDEF";

/// Decimal symbols, indexed by value
pub const DEC_DIGITS: &str = "0123456789";

/// Produce exactly `count` random hex characters from `engine`
///
/// # Example
/// ```
/// use progen_rng_core_rs::rng::random_hex_digits;
/// use progen_rng_core_rs::Engine;
///
/// let mut engine = Engine::new(42);
/// let s = random_hex_digits(&mut engine, 8);
/// assert_eq!(s.len(), 8);
/// assert!(s.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
pub fn random_hex_digits(engine: &mut Engine, count: usize) -> String {
    random_from_table(engine, HEX_DIGITS, count)
}

/// Produce exactly `count` random decimal characters from `engine`
pub fn random_digits(engine: &mut Engine, count: usize) -> String {
    random_from_table(engine, DEC_DIGITS, count)
}

fn random_from_table(engine: &mut Engine, table: &str, count: usize) -> String {
    let symbols = table.as_bytes();
    let len = symbols.len() as u64;

    (0..count)
        .map(|_| char::from(symbols[(engine.draw() % len) as usize]))
        .collect()
}
