//! The proquint alphabet and layout constants.
//!
//! Consonants carry 4 bits per character and vowels 2, so a five character
//! consonant-vowel-consonant-vowel-consonant syllable encodes exactly 16
//! bits. Both tables are ordered: a character's table position is its value.

/// The 16 unambiguous consonants, one per 4-bit value.
pub const CONSONANTS: [char; 16] = [
    'b', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'r', 's', 't', 'v', 'z',
];

/// The 4 unambiguous vowels, one per 2-bit value.
pub const VOWELS: [char; 4] = ['a', 'i', 'o', 'u'];

/// Characters in one syllable (C-V-C-V-C).
pub const SYLLABLE_LEN: usize = 5;

/// Characters in a full 32-bit proquint, not counting the separator.
pub const QUINT_LEN: usize = 2 * SYLLABLE_LEN;

/// Separator used by the canonical 11-character `cvcvc-cvcvc` form.
pub const DEFAULT_SEPARATOR: char = '-';

/// Look up the 4-bit value of a consonant, or `None` if `c` is not one.
pub fn consonant_index(c: char) -> Option<u32> {
    CONSONANTS.iter().position(|&k| k == c).map(|i| i as u32)
}

/// Look up the 2-bit value of a vowel, or `None` if `c` is not one.
pub fn vowel_index(c: char) -> Option<u32> {
    VOWELS.iter().position(|&k| k == c).map(|i| i as u32)
}
