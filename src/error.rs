//! Error types for proquint encoding and decoding operations.

use thiserror::Error;

/// Errors that can occur while decoding a proquint string.
///
/// Encoding never fails: every 32-bit value has exactly one proquint
/// rendering for a given separator choice. Decoding fails when the input
/// does not have the expected shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProquintError {
    /// The input does not have the expected length (10 characters, or 11
    /// when a separator is expected).
    #[error("invalid length: expected {expected} characters, got {actual}")]
    InvalidLength {
        /// Length the decoder expected for the requested separator mode.
        expected: usize,
        /// Length of the input actually supplied.
        actual: usize,
    },

    /// A character is neither a consonant, a vowel, nor the separator at
    /// its expected position.
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter {
        /// The offending character, after lowercasing.
        character: char,
        /// Zero-based position of the character in the input.
        position: usize,
    },
}
