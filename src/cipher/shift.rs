//! Shift (Caesar) cipher.
//!
//! Each ASCII letter is rotated by a fixed amount within its own case:
//! `(c - base + shift) mod 26 + base`. Case is preserved and every other
//! character passes through untouched.

use crate::cipher::{Cipher, CipherKind};
use crate::error::{ClassicryptError, InvalidKeyReason};
use crate::utils::letters::{index_to_letter, letter_index, rotate, ALPHABET_LEN};

/// Shift applied when the caller does not pick one.
pub const DEFAULT_SHIFT: u32 = 3;

/// Caesar cipher with a shift in `0..=25`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShiftCipher {
    shift: u32,
}

impl Default for ShiftCipher {
    fn default() -> Self {
        ShiftCipher {
            shift: DEFAULT_SHIFT,
        }
    }
}

impl ShiftCipher {
    /// Creates a shift cipher.
    ///
    /// # Errors
    /// Returns [`InvalidKeyReason::ShiftOutOfRange`] if `shift > 25`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::cipher::{Cipher, ShiftCipher};
    ///
    /// let caesar = ShiftCipher::new(3).unwrap();
    /// assert_eq!(caesar.encode("Hello, World!"), "Khoor, Zruog!");
    /// ```
    pub fn new(shift: u32) -> Result<Self, ClassicryptError> {
        if shift as usize >= ALPHABET_LEN {
            return Err(InvalidKeyReason::ShiftOutOfRange(shift).into());
        }
        Ok(ShiftCipher { shift })
    }

    /// The rotation amount.
    pub fn shift(&self) -> u32 {
        self.shift
    }

    fn apply(text: &str, shift: usize) -> String {
        text.chars()
            .map(|c| match letter_index(c) {
                Some(i) => index_to_letter(rotate(i, shift), c.is_ascii_uppercase()),
                None => c,
            })
            .collect()
    }
}

impl Cipher for ShiftCipher {
    fn kind(&self) -> CipherKind {
        CipherKind::Shift
    }

    fn encode(&self, text: &str) -> String {
        Self::apply(text, self.shift as usize)
    }

    fn decode(&self, text: &str) -> String {
        Self::apply(text, ALPHABET_LEN - self.shift as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shift_is_three() {
        assert_eq!(ShiftCipher::default().shift(), 3);
        assert_eq!(ShiftCipher::default().encode("xyz"), "abc");
    }

    #[test]
    fn test_preserves_case_and_punctuation() {
        let c = ShiftCipher::new(1).unwrap();
        assert_eq!(c.encode("Zz, Aa! 42"), "Aa, Bb! 42");
    }

    #[test]
    fn test_non_ascii_passes_through() {
        let c = ShiftCipher::new(5).unwrap();
        assert_eq!(c.encode("café"), "hfké");
        assert_eq!(c.decode("hfké"), "café");
    }

    #[test]
    fn test_zero_shift_is_identity() {
        let c = ShiftCipher::new(0).unwrap();
        assert_eq!(c.encode("Unchanged Text."), "Unchanged Text.");
        assert_eq!(c.decode("Unchanged Text."), "Unchanged Text.");
    }

    #[test]
    fn test_roundtrip_every_shift() {
        let text = "The quick brown fox jumps over the lazy dog.\nTHE END?";
        for s in 0..26 {
            let c = ShiftCipher::new(s).unwrap();
            assert_eq!(c.decode(&c.encode(text)), text, "shift {}", s);
        }
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(
            ShiftCipher::new(26),
            Err(ClassicryptError::InvalidKey(
                InvalidKeyReason::ShiftOutOfRange(26)
            ))
        );
    }
}
