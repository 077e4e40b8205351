//! Permutation (monoalphabetic substitution) cipher.
//!
//! The key is a bijection of the 26-letter alphabet onto itself. Output
//! letters are folded to a single case, so case information in the input
//! is lost. Non-letters pass through unchanged.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::cipher::{Cipher, CipherKind, OutputCase};
use crate::error::{ClassicryptError, InvalidKeyReason};
use crate::utils::letters::{index_to_letter, letter_index, ALPHABET_LEN};

/// Substitution cipher driven by an alphabet permutation.
///
/// Stores both directions so decoding never has to search the table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PermutationCipher {
    forward: [u8; ALPHABET_LEN],
    inverse: [u8; ALPHABET_LEN],
    case: OutputCase,
}

impl PermutationCipher {
    /// Builds a cipher from a 26-letter mapping string.
    ///
    /// Letter `i` of `mapping` is the image of the `i`-th alphabet letter,
    /// so `"bcd...za"` encodes `a -> b`, `b -> c`, and so on. Case is ignored.
    ///
    /// # Errors
    /// - [`InvalidKeyReason::Empty`] for an empty mapping.
    /// - [`InvalidKeyReason::NonAlphabetic`] for any non-letter.
    /// - [`InvalidKeyReason::NotBijective`] unless every letter appears once.
    pub fn from_mapping(mapping: &str) -> Result<Self, ClassicryptError> {
        if mapping.is_empty() {
            return Err(InvalidKeyReason::Empty.into());
        }
        let mut images = Vec::with_capacity(ALPHABET_LEN);
        for c in mapping.chars() {
            let i = letter_index(c).ok_or(InvalidKeyReason::NonAlphabetic(c))?;
            images.push(i as u8);
        }
        if images.len() != ALPHABET_LEN {
            return Err(InvalidKeyReason::NotBijective.into());
        }
        let mut forward = [0u8; ALPHABET_LEN];
        forward.copy_from_slice(&images);
        Self::from_table(forward)
    }

    /// Builds a cipher from a table of alphabet indices.
    ///
    /// # Errors
    /// Returns [`InvalidKeyReason::NotBijective`] if an entry is `>= 26`
    /// or repeats.
    pub fn from_table(forward: [u8; ALPHABET_LEN]) -> Result<Self, ClassicryptError> {
        let mut inverse = [u8::MAX; ALPHABET_LEN];
        for (plain, &image) in forward.iter().enumerate() {
            let slot = inverse
                .get_mut(image as usize)
                .ok_or(InvalidKeyReason::NotBijective)?;
            if *slot != u8::MAX {
                return Err(InvalidKeyReason::NotBijective.into());
            }
            *slot = plain as u8;
        }
        Ok(PermutationCipher {
            forward,
            inverse,
            case: OutputCase::Lower,
        })
    }

    /// Generates a random permutation from the thread-local RNG.
    ///
    /// Suitable for demonstrations only.
    pub fn random() -> Self {
        Self::random_with(&mut rand::thread_rng())
    }

    /// Generates a random permutation from the supplied entropy source.
    ///
    /// The same seeded RNG always yields the same permutation.
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut forward = [0u8; ALPHABET_LEN];
        for (i, slot) in forward.iter_mut().enumerate() {
            *slot = i as u8;
        }
        forward.shuffle(rng);
        let mut inverse = [0u8; ALPHABET_LEN];
        for (plain, &image) in forward.iter().enumerate() {
            inverse[image as usize] = plain as u8;
        }
        PermutationCipher {
            forward,
            inverse,
            case: OutputCase::Lower,
        }
    }

    /// Sets the case used for output letters.
    pub fn with_case(mut self, case: OutputCase) -> Self {
        self.case = case;
        self
    }

    /// The mapping as 26 lowercase letters, in alphabet order.
    pub fn mapping(&self) -> String {
        self.forward
            .iter()
            .map(|&i| index_to_letter(i as usize, false))
            .collect()
    }

    /// The cipher whose encoding is this cipher's decoding.
    pub fn inverse(&self) -> Self {
        PermutationCipher {
            forward: self.inverse,
            inverse: self.forward,
            case: self.case,
        }
    }

    fn apply(&self, text: &str, table: &[u8; ALPHABET_LEN]) -> String {
        let upper = self.case.is_upper();
        text.chars()
            .map(|c| match letter_index(c) {
                Some(i) => index_to_letter(table[i] as usize, upper),
                None => c,
            })
            .collect()
    }
}

impl Cipher for PermutationCipher {
    fn kind(&self) -> CipherKind {
        CipherKind::Permutation
    }

    fn encode(&self, text: &str) -> String {
        self.apply(text, &self.forward)
    }

    fn decode(&self, text: &str) -> String {
        self.apply(text, &self.inverse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const REVERSED: &str = "zyxwvutsrqponmlkjihgfedcba";

    #[test]
    fn test_from_mapping_encodes_lowercase() {
        let c = PermutationCipher::from_mapping(REVERSED).unwrap();
        assert_eq!(c.encode("Hello, World!"), "svool, dliow!");
        assert_eq!(c.decode("svool, dliow!"), "hello, world!");
    }

    #[test]
    fn test_upper_case_output() {
        let c = PermutationCipher::from_mapping(REVERSED)
            .unwrap()
            .with_case(OutputCase::Upper);
        assert_eq!(c.encode("abc xyz"), "ZYX CBA");
    }

    #[test]
    fn test_mapping_case_insensitive() {
        let c = PermutationCipher::from_mapping(&REVERSED.to_uppercase()).unwrap();
        assert_eq!(c.mapping(), REVERSED);
    }

    #[test]
    fn test_rejects_duplicate_letter() {
        let mut bad = REVERSED.to_string();
        bad.replace_range(0..1, "y");
        assert_eq!(
            PermutationCipher::from_mapping(&bad),
            Err(ClassicryptError::InvalidKey(InvalidKeyReason::NotBijective))
        );
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert_eq!(
            PermutationCipher::from_mapping("abc"),
            Err(ClassicryptError::InvalidKey(InvalidKeyReason::NotBijective))
        );
        assert_eq!(
            PermutationCipher::from_mapping(""),
            Err(ClassicryptError::InvalidKey(InvalidKeyReason::Empty))
        );
    }

    #[test]
    fn test_rejects_non_alphabetic() {
        assert_eq!(
            PermutationCipher::from_mapping("abcdefghijklmnopqrstuvwxy1"),
            Err(ClassicryptError::InvalidKey(
                InvalidKeyReason::NonAlphabetic('1')
            ))
        );
    }

    #[test]
    fn test_from_table_rejects_out_of_alphabet_index() {
        let mut table = [0u8; ALPHABET_LEN];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = i as u8;
        }
        table[5] = 26;
        assert_eq!(
            PermutationCipher::from_table(table),
            Err(ClassicryptError::InvalidKey(InvalidKeyReason::NotBijective))
        );
    }

    #[test]
    fn test_seeded_random_is_deterministic() {
        let a = PermutationCipher::random_with(&mut ChaCha8Rng::seed_from_u64(7));
        let b = PermutationCipher::random_with(&mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(a, b);
        assert_eq!(a.encode("deterministic"), b.encode("deterministic"));
    }

    #[test]
    fn test_random_is_bijection() {
        let c = PermutationCipher::random_with(&mut ChaCha8Rng::seed_from_u64(2024));
        let rebuilt = PermutationCipher::from_mapping(&c.mapping()).unwrap();
        assert_eq!(rebuilt, c);
    }

    #[test]
    fn test_inverse_swaps_directions() {
        let c = PermutationCipher::random_with(&mut ChaCha8Rng::seed_from_u64(11));
        let text = "attack at dawn";
        assert_eq!(c.inverse().encode(&c.encode(text)), text);
        assert_eq!(c.inverse().inverse(), c);
    }
}
