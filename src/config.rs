//! Configuration surface of the toolkit.
//!
//! Every type here deserializes with defaults for missing fields, so a
//! partial document (JSON, TOML, ...) is enough to override one knob.

use serde::{Deserialize, Serialize};

use crate::cipher::permutation::PermutationCipher;
use crate::cipher::shift::ShiftCipher;
use crate::cipher::vigenere::{VigenereCipher, DEFAULT_KEYWORD};
use crate::cipher::{CipherKind, Key, OutputCase};
use crate::error::ClassicryptError;

/// Default shortest repeated substring considered by Kasiski.
pub const DEFAULT_MIN_SUBSTRING_LEN: usize = 3;

/// Default longest repeated substring considered by Kasiski.
pub const DEFAULT_MAX_SUBSTRING_LEN: usize = 6;

/// Default largest candidate key length for Kasiski.
pub const DEFAULT_MAX_KEY_LENGTH: usize = 20;

/// Default largest candidate key length for the IC scan.
pub const DEFAULT_IC_SCAN_MAX_KEY_LENGTH: usize = 15;

/// Widest brute-force key, in bytes.
pub const MAX_KEY_WIDTH: usize = 4;

/// Selects a cipher and its key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CipherConfig {
    /// Cipher family.
    pub kind: CipherKind,
    /// Key text; `None` picks the family default.
    pub key: Option<String>,
    /// Output case for the case-folding ciphers.
    pub case: OutputCase,
}

impl CipherConfig {
    /// Builds the configured key.
    ///
    /// Without an explicit key: shift `3`, Vigenère keyword `"KEY"`, or a
    /// freshly generated random permutation.
    ///
    /// # Errors
    /// Returns [`ClassicryptError::InvalidKey`] if `key` is not valid for `kind`.
    pub fn build_key(&self) -> Result<Key, ClassicryptError> {
        let key = match (&self.key, self.kind) {
            (Some(text), kind) => Key::parse(kind, text)?,
            (None, CipherKind::Shift) => Key::Shift(ShiftCipher::default()),
            (None, CipherKind::Permutation) => Key::Permutation(PermutationCipher::random()),
            (None, CipherKind::Vigenere) => Key::Vigenere(VigenereCipher::new(DEFAULT_KEYWORD)?),
        };
        Ok(match key {
            Key::Permutation(c) => Key::Permutation(c.with_case(self.case)),
            Key::Vigenere(c) => Key::Vigenere(c.with_case(self.case)),
            shift => shift,
        })
    }
}

/// Bounds for the key length estimators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Shortest repeated substring for Kasiski.
    pub min_substring_len: usize,
    /// Longest repeated substring for Kasiski.
    pub max_substring_len: usize,
    /// Largest candidate key length for Kasiski.
    pub max_key_length: usize,
    /// Largest candidate key length for the IC scan.
    pub ic_scan_max_key_length: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            min_substring_len: DEFAULT_MIN_SUBSTRING_LEN,
            max_substring_len: DEFAULT_MAX_SUBSTRING_LEN,
            max_key_length: DEFAULT_MAX_KEY_LENGTH,
            ic_scan_max_key_length: DEFAULT_IC_SCAN_MAX_KEY_LENGTH,
        }
    }
}

impl AnalysisConfig {
    /// Checks that every bound is usable.
    ///
    /// # Errors
    /// Returns [`ClassicryptError::InvalidParameter`] when
    /// `min_substring_len == 0`, `min_substring_len > max_substring_len`,
    /// `max_key_length < 2`, or `ic_scan_max_key_length == 0`.
    pub fn validate(&self) -> Result<(), ClassicryptError> {
        if self.min_substring_len == 0 {
            return Err(ClassicryptError::InvalidParameter(
                "min_substring_len must be at least 1".into(),
            ));
        }
        if self.min_substring_len > self.max_substring_len {
            return Err(ClassicryptError::InvalidParameter(format!(
                "min_substring_len {} exceeds max_substring_len {}",
                self.min_substring_len, self.max_substring_len
            )));
        }
        if self.max_key_length < 2 {
            return Err(ClassicryptError::InvalidParameter(
                "max_key_length must be at least 2".into(),
            ));
        }
        if self.ic_scan_max_key_length == 0 {
            return Err(ClassicryptError::InvalidParameter(
                "ic_scan_max_key_length must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Brute-force search settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Key width in bytes; `None` uses the ciphertext length.
    pub key_width: Option<usize>,
}

impl SearchConfig {
    /// Key width to use against `ciphertext`.
    ///
    /// # Errors
    /// Returns [`ClassicryptError::InvalidParameter`] if the ciphertext is
    /// empty or the width is outside `1..=MAX_KEY_WIDTH`.
    pub fn resolve_width(&self, ciphertext: &[u8]) -> Result<usize, ClassicryptError> {
        if ciphertext.is_empty() {
            return Err(ClassicryptError::InvalidParameter(
                "ciphertext must not be empty".into(),
            ));
        }
        let width = self.key_width.unwrap_or(ciphertext.len());
        if !(1..=MAX_KEY_WIDTH).contains(&width) {
            return Err(ClassicryptError::InvalidParameter(format!(
                "key width {} is outside 1..={}",
                width, MAX_KEY_WIDTH
            )));
        }
        Ok(width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::Cipher;

    #[test]
    fn test_default_cipher_is_shift_three() {
        let key = CipherConfig::default().build_key().unwrap();
        assert_eq!(key.kind(), CipherKind::Shift);
        assert_eq!(key.encode("abc"), "def");
    }

    #[test]
    fn test_default_vigenere_keyword() {
        let config = CipherConfig {
            kind: CipherKind::Vigenere,
            ..CipherConfig::default()
        };
        match config.build_key().unwrap() {
            Key::Vigenere(v) => assert_eq!(v.keyword(), "key"),
            other => panic!("unexpected key {:?}", other),
        }
    }

    #[test]
    fn test_default_permutation_is_random_bijection() {
        let config = CipherConfig {
            kind: CipherKind::Permutation,
            ..CipherConfig::default()
        };
        let key = config.build_key().unwrap();
        assert_eq!(key.decode(&key.encode("round trip")), "round trip");
    }

    #[test]
    fn test_case_applied_to_vigenere() {
        let config = CipherConfig {
            kind: CipherKind::Vigenere,
            key: Some("MAGIC".into()),
            case: OutputCase::Upper,
        };
        let key = config.build_key().unwrap();
        assert_eq!(key.encode("thewand"), "FHKECZD");
    }

    #[test]
    fn test_bad_key_propagates() {
        let config = CipherConfig {
            kind: CipherKind::Shift,
            key: Some("-1".into()),
            case: OutputCase::Lower,
        };
        assert!(matches!(
            config.build_key(),
            Err(ClassicryptError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_analysis_defaults_validate() {
        let config = AnalysisConfig::default();
        assert_eq!(config.min_substring_len, 3);
        assert_eq!(config.max_substring_len, 6);
        assert_eq!(config.max_key_length, 20);
        assert_eq!(config.ic_scan_max_key_length, 15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_analysis_validate_rejects() {
        let base = AnalysisConfig::default();
        for bad in [
            AnalysisConfig { min_substring_len: 0, ..base },
            AnalysisConfig { min_substring_len: 7, ..base },
            AnalysisConfig { max_key_length: 1, ..base },
            AnalysisConfig { ic_scan_max_key_length: 0, ..base },
        ] {
            assert!(bad.validate().is_err(), "{:?} should be rejected", bad);
        }
    }

    #[test]
    fn test_search_width_resolution() {
        let config = SearchConfig::default();
        assert_eq!(config.resolve_width(&[1, 2, 3]).unwrap(), 3);
        assert!(config.resolve_width(&[]).is_err());
        assert!(config.resolve_width(&[0; 5]).is_err());
        let fixed = SearchConfig { key_width: Some(1) };
        assert_eq!(fixed.resolve_width(&[0; 5]).unwrap(), 1);
        let zero = SearchConfig { key_width: Some(0) };
        assert!(zero.resolve_width(&[0]).is_err());
    }
}
