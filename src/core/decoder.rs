//! Proquint decoding: from a pronounceable string back to its 32-bit value.

use crate::core::alphabet::{consonant_index, vowel_index, QUINT_LEN, SYLLABLE_LEN};
use crate::error::ProquintError;

/// Decode a proquint string into its 32-bit value.
///
/// The input must be exactly 10 characters long, or 11 when `separator` is
/// given (one position reserved for the separator between the syllables).
/// Matching is case-insensitive: the input is lowercased before lookup.
///
/// Each consonant contributes 4 bits and each vowel 2, accumulated
/// most-significant first, so a well-formed input yields exactly 32 bits.
/// The separator is accepted only at its expected position, directly after
/// the first syllable; a separator anywhere else, or any character outside
/// the two alphabets, is rejected.
///
/// # Arguments
///
/// * `text` - The proquint string to decode
/// * `separator` - The separator character the input is expected to carry
///
/// # Returns
///
/// The decoded value, or a [`ProquintError`] naming the offending length or
/// character.
///
/// # Examples
///
/// ```
/// use proquint::decode_quint;
///
/// assert_eq!(decode_quint("lusab-babad", Some('-'))?, 0x7F00_0001);
/// assert_eq!(decode_quint("GUTIH-TUGAD", Some('-'))?, 0x3F54_DCC1);
/// assert_eq!(decode_quint("todahvobij", None)?, 0xD844_E815);
///
/// assert!(decode_quint("lusab", Some('-')).is_err());
/// # Ok::<(), proquint::ProquintError>(())
/// ```
pub fn decode_quint(text: &str, separator: Option<char>) -> Result<u32, ProquintError> {
    let expected = QUINT_LEN + usize::from(separator.is_some());
    let actual = text.chars().count();
    if actual != expected {
        return Err(ProquintError::InvalidLength { expected, actual });
    }

    let mut value: u32 = 0;
    for (position, c) in text.to_lowercase().chars().enumerate() {
        if separator == Some(c) && position == SYLLABLE_LEN {
            continue;
        }
        if let Some(index) = consonant_index(c) {
            value = (value << 4) | index;
        } else if let Some(index) = vowel_index(c) {
            value = (value << 2) | index;
        } else {
            return Err(ProquintError::InvalidCharacter {
                character: c,
                position,
            });
        }
    }

    Ok(value)
}
