//! Vigenère cipher.
//!
//! Letter `j` of the alphabetic stream is rotated by
//! `keyword[j mod len] - 'a'`. The key position advances only on ASCII
//! letters: spaces and punctuation pass through without consuming a key
//! letter. Output letters are folded to a single case.

use crate::cipher::{Cipher, CipherKind, OutputCase};
use crate::error::{ClassicryptError, InvalidKeyReason};
use crate::utils::letters::{index_to_letter, letter_index, rotate, ALPHABET_LEN};

/// Keyword used when none is configured.
pub const DEFAULT_KEYWORD: &str = "KEY";

/// Polyalphabetic cipher over a repeating keyword.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VigenereCipher {
    shifts: Vec<u8>,
    case: OutputCase,
}

impl VigenereCipher {
    /// Creates a cipher from a keyword of ASCII letters (any case).
    ///
    /// # Errors
    /// - [`InvalidKeyReason::Empty`] for an empty keyword.
    /// - [`InvalidKeyReason::NonAlphabetic`] for any other character.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::cipher::{Cipher, OutputCase, VigenereCipher};
    ///
    /// let v = VigenereCipher::new("MAGIC").unwrap().with_case(OutputCase::Upper);
    /// assert_eq!(v.encode("THEWANDCHOOSESTHEWIZARD"), "FHKECZDIPQASKAVTECQBMRJ");
    /// ```
    pub fn new(keyword: &str) -> Result<Self, ClassicryptError> {
        if keyword.is_empty() {
            return Err(InvalidKeyReason::Empty.into());
        }
        let shifts = keyword
            .chars()
            .map(|c| {
                letter_index(c)
                    .map(|i| i as u8)
                    .ok_or(InvalidKeyReason::NonAlphabetic(c))
            })
            .collect::<Result<Vec<u8>, _>>()?;
        Ok(VigenereCipher {
            shifts,
            case: OutputCase::Lower,
        })
    }

    /// Sets the case used for output letters.
    pub fn with_case(mut self, case: OutputCase) -> Self {
        self.case = case;
        self
    }

    /// The keyword in lowercase.
    pub fn keyword(&self) -> String {
        self.shifts
            .iter()
            .map(|&s| index_to_letter(s as usize, false))
            .collect()
    }

    /// Number of letters in the keyword, i.e. the cipher's period.
    pub fn period(&self) -> usize {
        self.shifts.len()
    }

    fn apply(&self, text: &str, decrypt: bool) -> String {
        let upper = self.case.is_upper();
        let mut position = 0usize;
        text.chars()
            .map(|c| match letter_index(c) {
                Some(i) => {
                    let shift = self.shifts[position % self.shifts.len()] as usize;
                    position += 1;
                    let shift = if decrypt {
                        (ALPHABET_LEN - shift) % ALPHABET_LEN
                    } else {
                        shift
                    };
                    index_to_letter(rotate(i, shift), upper)
                }
                None => c,
            })
            .collect()
    }
}

impl Cipher for VigenereCipher {
    fn kind(&self) -> CipherKind {
        CipherKind::Vigenere
    }

    fn encode(&self, text: &str) -> String {
        self.apply(text, false)
    }

    fn decode(&self, text: &str) -> String {
        self.apply(text, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_letters_do_not_consume_key() {
        let v = VigenereCipher::new("key").unwrap();
        // "Hello, World!" -> letters HELLOWORLD against KEYKEYKEYK
        assert_eq!(v.encode("Hello, World!"), "rijvs, uyvjn!");
        assert_eq!(v.decode("rijvs, uyvjn!"), "hello, world!");
    }

    #[test]
    fn test_output_folded_to_lowercase_by_default() {
        let v = VigenereCipher::new("A").unwrap();
        assert_eq!(v.encode("MiXeD"), "mixed");
    }

    #[test]
    fn test_keyword_case_insensitive() {
        let lower = VigenereCipher::new("magic").unwrap();
        let upper = VigenereCipher::new("MAGIC").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(upper.keyword(), "magic");
        assert_eq!(upper.period(), 5);
    }

    #[test]
    fn test_empty_keyword_rejected() {
        assert_eq!(
            VigenereCipher::new(""),
            Err(ClassicryptError::InvalidKey(InvalidKeyReason::Empty))
        );
    }

    #[test]
    fn test_keyword_with_space_rejected() {
        assert_eq!(
            VigenereCipher::new("two words"),
            Err(ClassicryptError::InvalidKey(
                InvalidKeyReason::NonAlphabetic(' ')
            ))
        );
    }

    #[test]
    fn test_single_letter_keyword_is_shift() {
        let v = VigenereCipher::new("d").unwrap();
        assert_eq!(v.encode("abc xyz"), "def abc");
    }
}
