//! Random proquint generation.
//!
//! The generator is owned by the caller and passed in explicitly, so the
//! codec itself holds no process-wide mutable state. Production callers
//! pass `rand::rng()`; tests pass a seeded generator for determinism.
//! General-purpose randomness is sufficient here, these identifiers carry
//! no security weight.

use rand::Rng;
use rand::RngExt;

use crate::core::encoder::encode_u32;

/// Draw one uniformly distributed 32-bit value from `rng`.
///
/// There is no uniqueness guarantee across calls; two draws collide with
/// probability about 1 in 2^32.
pub fn random_u32<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.random()
}

/// Draw a random value and render it as a proquint string.
///
/// # Examples
///
/// ```
/// use proquint::random_quint;
///
/// let text = random_quint(&mut rand::rng(), Some('-'));
/// assert_eq!(text.len(), 11);
/// ```
pub fn random_quint<R: Rng + ?Sized>(rng: &mut R, separator: Option<char>) -> String {
    encode_u32(random_u32(rng), separator)
}
