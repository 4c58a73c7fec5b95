//! The `Quint` value type: a comparable, hashable 32-bit proquint handle.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::core::alphabet::DEFAULT_SEPARATOR;
use crate::core::decoder::decode_quint;
use crate::core::encoder::encode_u32;
use crate::core::random::random_u32;
use crate::error::ProquintError;

/// A 32-bit identifier with a canonical `cvcvc-cvcvc` proquint rendering.
///
/// `Quint` is an immutable value type. Equality, ordering, and hashing all
/// follow the wrapped integer, never the lexicographic order of the string
/// form. Construction and rendering are routed through the codec with the
/// fixed `-` separator, so the string form is always exactly 11 characters.
///
/// # Examples
///
/// ```
/// use proquint::Quint;
///
/// let quint = Quint::from_u32(0x7F00_0001);
/// assert_eq!(quint.to_string(), "lusab-babad");
///
/// let parsed: Quint = "lusab-babad".parse()?;
/// assert_eq!(parsed, quint);
/// assert_eq!(parsed.to_u32(), 0x7F00_0001);
/// # Ok::<(), proquint::ProquintError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quint(u32);

impl Quint {
    /// Wrap a 32-bit value. Every value is valid, no checks are needed.
    pub fn from_u32(value: u32) -> Self {
        Quint(value)
    }

    /// The wrapped 32-bit value.
    pub fn to_u32(self) -> u32 {
        self.0
    }

    /// Create a `Quint` with a value drawn from `rng`.
    ///
    /// The generator is caller-owned; pass `rand::rng()` for the
    /// thread-local one, or a seeded generator for reproducible output.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Quint(random_u32(rng))
    }
}

impl fmt::Display for Quint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_u32(self.0, Some(DEFAULT_SEPARATOR)))
    }
}

impl FromStr for Quint {
    type Err = ProquintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_quint(s, Some(DEFAULT_SEPARATOR)).map(Quint)
    }
}

impl From<u32> for Quint {
    fn from(value: u32) -> Self {
        Quint(value)
    }
}

impl From<Quint> for u32 {
    fn from(quint: Quint) -> Self {
        quint.0
    }
}

impl PartialEq<u32> for Quint {
    fn eq(&self, other: &u32) -> bool {
        self.0 == *other
    }
}

impl PartialEq<Quint> for u32 {
    fn eq(&self, other: &Quint) -> bool {
        *self == other.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(quint: Quint) -> u64 {
        let mut hasher = DefaultHasher::new();
        quint.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_construction_and_accessors() {
        let quint = Quint::from_u32(123_456);
        assert_eq!(quint.to_u32(), 123_456);

        let converted: Quint = 123_456u32.into();
        assert_eq!(converted, quint);
        assert_eq!(u32::from(converted), 123_456);
    }

    #[test]
    fn test_display_uses_fixed_separator() {
        assert_eq!(Quint::from_u32(0).to_string(), "babab-babab");
        assert_eq!(Quint::from_u32(0x7F00_0001).to_string(), "lusab-babad");
        assert_eq!(Quint::from_u32(u32::MAX).to_string().len(), 11);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!("lusab".parse::<Quint>().is_err());
        assert!("lusabbabad".parse::<Quint>().is_err());
        assert!("lusab-babe?".parse::<Quint>().is_err());
    }

    #[test]
    fn test_equality_against_bare_u32() {
        let quint = Quint::from_u32(0xDEAD_BEEF);
        assert_eq!(quint, 0xDEAD_BEEFu32);
        assert_eq!(0xDEAD_BEEFu32, quint);
        assert_ne!(quint, 0xDEAD_BEEEu32);
    }

    #[test]
    fn test_ordering_follows_the_integer() {
        let smaller = Quint::from_u32(123_456);
        let larger = Quint::from_u32(123_499);

        assert!(smaller < larger);
        assert!(smaller <= larger);
        assert!(larger > smaller);
        assert!(larger >= smaller);
        assert_eq!(smaller.cmp(&larger), std::cmp::Ordering::Less);
    }

    #[test]
    fn test_hash_consistent_with_equality() {
        let a = Quint::from_u32(0x1234_5678);
        let b = Quint::from_u32(0x1234_5678);
        assert_eq!(a, b);
        assert_eq!(hash_of(a), hash_of(b));
    }
}
