//! Error types for the classicrypt library.

use thiserror::Error;

/// Errors produced by the classicrypt library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassicryptError {
    /// The supplied key cannot drive the requested cipher.
    #[error("Invalid key: {0}")]
    InvalidKey(InvalidKeyReason),
    /// An analysis or search bound is outside its valid range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Why a key was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidKeyReason {
    /// Key has no characters.
    #[error("key is empty")]
    Empty,
    /// Key contains a character outside `a..z` / `A..Z`.
    #[error("key contains non-alphabetic character {0:?}")]
    NonAlphabetic(char),
    /// Permutation key does not map the alphabet onto itself one-to-one.
    #[error("permutation is not a bijection over the alphabet")]
    NotBijective,
    /// Shift amount is not in `0..=25`.
    #[error("shift {0} is outside the range 0..=25")]
    ShiftOutOfRange(u32),
    /// Key text could not be parsed for the selected cipher.
    #[error("malformed key: {0}")]
    Malformed(String),
}

impl From<InvalidKeyReason> for ClassicryptError {
    fn from(reason: InvalidKeyReason) -> Self {
        ClassicryptError::InvalidKey(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_empty_key() {
        let err = ClassicryptError::InvalidKey(InvalidKeyReason::Empty);
        assert_eq!(format!("{}", err), "Invalid key: key is empty");
    }

    #[test]
    fn test_display_non_alphabetic() {
        let err = ClassicryptError::from(InvalidKeyReason::NonAlphabetic('3'));
        assert_eq!(
            format!("{}", err),
            "Invalid key: key contains non-alphabetic character '3'"
        );
    }

    #[test]
    fn test_display_shift_out_of_range() {
        let err = ClassicryptError::from(InvalidKeyReason::ShiftOutOfRange(26));
        assert_eq!(
            format!("{}", err),
            "Invalid key: shift 26 is outside the range 0..=25"
        );
    }

    #[test]
    fn test_display_invalid_parameter() {
        let err = ClassicryptError::InvalidParameter("max_key_length must be at least 1".into());
        assert_eq!(
            format!("{}", err),
            "Invalid parameter: max_key_length must be at least 1"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            ClassicryptError::from(InvalidKeyReason::NotBijective),
            ClassicryptError::InvalidKey(InvalidKeyReason::NotBijective)
        );
        assert_ne!(
            ClassicryptError::from(InvalidKeyReason::Empty),
            ClassicryptError::from(InvalidKeyReason::NotBijective)
        );
    }
}
