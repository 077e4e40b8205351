//! ASCII alphabet helpers.
//!
//! Every transform and statistic in the crate works over the 26-letter
//! ASCII alphabet. Characters outside `a..z` / `A..Z` are never letters,
//! including non-ASCII alphabetic characters.

/// Number of symbols in the alphabet.
pub(crate) const ALPHABET_LEN: usize = 26;

/// Returns the zero-based alphabet index of `c`, ignoring case.
///
/// # Parameters
/// - `c`: Character to classify.
///
/// # Returns
/// `Some(0..26)` for ASCII letters, `None` otherwise.
pub(crate) fn letter_index(c: char) -> Option<usize> {
    if c.is_ascii_alphabetic() {
        Some((c.to_ascii_lowercase() as u8 - b'a') as usize)
    } else {
        None
    }
}

/// Maps an alphabet index back to a letter in the requested case.
pub(crate) fn index_to_letter(index: usize, uppercase: bool) -> char {
    let base = if uppercase { b'A' } else { b'a' };
    (base + (index % ALPHABET_LEN) as u8) as char
}

/// Rotates an alphabet index forward by `shift` positions (mod 26).
pub(crate) fn rotate(index: usize, shift: usize) -> usize {
    (index + shift) % ALPHABET_LEN
}

/// Removes all whitespace and uppercases the remaining characters.
///
/// Non-letter, non-whitespace characters are kept.
pub(crate) fn strip_whitespace_upper(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Keeps only ASCII letters, uppercased.
pub(crate) fn letters_upper(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
