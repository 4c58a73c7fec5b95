//! Proquint - pronounceable identifiers for 32-bit values
//!
//! A proquint is a PRO-nounceable QUINT-uplet: a string of alternating
//! consonants and vowels encoding a fixed number of bits per character.
//! This crate converts 32-bit values (IP addresses, hash fragments, any
//! opaque numeric identifier) into strings that are easier to read,
//! compare, and transcribe aloud than hex or decimal, and back again.
//!
//! # Features
//!
//! - **Fixed-length**: every 32-bit value encodes to exactly 10 characters,
//!   11 with the optional syllable separator
//! - **Reversible**: decoding is the bit-for-bit inverse of encoding
//! - **Case-insensitive**: decoding lowercases its input before lookup
//! - **Strictly validated**: malformed input fails with a typed error, not
//!   a silent default
//!
//! # Quick Start
//!
//! ```
//! use proquint::{decode_quint, encode_u32, Quint};
//!
//! // 127.0.0.1 as a network-byte-order u32
//! let text = encode_u32(0x7F00_0001, Some('-'));
//! assert_eq!(text, "lusab-babad");
//!
//! let value = decode_quint(&text, Some('-'))?;
//! assert_eq!(value, 0x7F00_0001);
//!
//! // Or work with the value type, which always uses the '-' separator
//! let quint: Quint = "gutih-tugad".parse()?;
//! assert_eq!(quint.to_u32(), 0x3F54_DCC1); // 63.84.220.193
//! assert_eq!(quint.to_string(), "gutih-tugad");
//!
//! // Random identifiers take a caller-owned generator
//! let fresh = Quint::random(&mut rand::rng());
//! assert_eq!(fresh.to_string().len(), 11);
//! # Ok::<(), proquint::ProquintError>(())
//! ```
//!
//! # Encoding Format
//!
//! Each 16-bit half of the value becomes one five character syllable,
//! most-significant bits first:
//!
//! | Slot      | Bits | Alphabet           |
//! |-----------|------|--------------------|
//! | consonant | 4    | `bdfghjklmnprstvz` |
//! | vowel     | 2    | `aiou`             |
//! | consonant | 4    | `bdfghjklmnprstvz` |
//! | vowel     | 2    | `aiou`             |
//! | consonant | 4    | `bdfghjklmnprstvz` |
//!
//! The two syllables are concatenated, optionally with a single separator
//! character between them (conventionally `-`).
//!
//! # Error Handling
//!
//! Decoding returns `Result<u32, ProquintError>`. The two failure cases:
//!
//! - Wrong input length for the requested separator mode
//! - A character outside both alphabets, or the separator out of position
//!
//! Encoding and random generation never fail.

// Re-export the codec surface
pub use crate::core::{decode_quint, encode_u32, random_quint, random_u32};
pub use crate::core::{consonant_index, vowel_index, CONSONANTS, VOWELS};
pub use crate::core::{DEFAULT_SEPARATOR, QUINT_LEN, SYLLABLE_LEN};

// Re-export public types
pub use crate::error::ProquintError;
pub use crate::types::Quint;

// Module declarations
pub mod core;
pub mod error;
pub mod types;
