//! Classical cipher transforms.
//!
//! Three substitution ciphers share the [`Cipher`] trait:
//!
//! ```text
//! ShiftCipher        (Caesar: one fixed rotation, case preserved)
//! PermutationCipher  (monoalphabetic: arbitrary bijection, case folded)
//! VigenereCipher     (polyalphabetic: keyword rotations, case folded)
//! ```
//!
//! [`Key`] tags a validated key with its cipher kind so callers can
//! select a transform at runtime instead of naming a concrete type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ClassicryptError, InvalidKeyReason};

pub mod permutation;
pub mod shift;
pub mod vigenere;

pub use permutation::PermutationCipher;
pub use shift::ShiftCipher;
pub use vigenere::VigenereCipher;

/// A reversible text transform.
pub trait Cipher {
    /// Which cipher family this transform belongs to.
    fn kind(&self) -> CipherKind;

    /// Encrypts `text`. Non-letters pass through unchanged.
    fn encode(&self, text: &str) -> String;

    /// Inverts [`encode`](Self::encode) up to the cipher's case policy.
    fn decode(&self, text: &str) -> String;
}

/// Cipher family selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CipherKind {
    /// Caesar / shift cipher.
    #[default]
    Shift,
    /// Monoalphabetic substitution.
    Permutation,
    /// Vigenère polyalphabetic cipher.
    Vigenere,
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherKind::Shift => write!(f, "shift"),
            CipherKind::Permutation => write!(f, "permutation"),
            CipherKind::Vigenere => write!(f, "vigenere"),
        }
    }
}

impl FromStr for CipherKind {
    type Err = ClassicryptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shift" | "caesar" => Ok(CipherKind::Shift),
            "permutation" | "substitution" | "monoalphabetic" => Ok(CipherKind::Permutation),
            "vigenere" => Ok(CipherKind::Vigenere),
            other => Err(ClassicryptError::InvalidParameter(format!(
                "unknown cipher kind {:?}",
                other
            ))),
        }
    }
}

/// Letter case applied to the output of case-folding ciphers.
///
/// The shift cipher always preserves the input case and ignores this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputCase {
    /// Fold every letter to lowercase.
    #[default]
    Lower,
    /// Fold every letter to uppercase.
    Upper,
}

impl OutputCase {
    pub(crate) fn is_upper(self) -> bool {
        matches!(self, OutputCase::Upper)
    }
}

/// A validated key, tagged with the cipher it drives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// Rotation amount.
    Shift(ShiftCipher),
    /// Alphabet bijection.
    Permutation(PermutationCipher),
    /// Repeating keyword.
    Vigenere(VigenereCipher),
}

impl Key {
    /// Parses `key` as a key for `kind`.
    ///
    /// # Parameters
    /// - `kind`: Cipher family the key is meant for.
    /// - `key`: Decimal shift (`"3"`), 26-letter mapping, or keyword.
    ///
    /// # Errors
    /// Returns [`ClassicryptError::InvalidKey`] when the text is not a valid
    /// key for `kind`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::cipher::{Cipher, CipherKind, Key};
    ///
    /// let key = Key::parse(CipherKind::Vigenere, "lemon").unwrap();
    /// assert_eq!(key.encode("attack at dawn"), "lxfopv ef rnhr");
    /// ```
    pub fn parse(kind: CipherKind, key: &str) -> Result<Self, ClassicryptError> {
        match kind {
            CipherKind::Shift => {
                let trimmed = key.trim();
                if trimmed.is_empty() {
                    return Err(InvalidKeyReason::Empty.into());
                }
                let shift: u32 = trimmed
                    .parse()
                    .map_err(|_| InvalidKeyReason::Malformed(trimmed.to_string()))?;
                Ok(Key::Shift(ShiftCipher::new(shift)?))
            }
            CipherKind::Permutation => Ok(Key::Permutation(PermutationCipher::from_mapping(key)?)),
            CipherKind::Vigenere => Ok(Key::Vigenere(VigenereCipher::new(key)?)),
        }
    }

    /// Returns the key's cipher as a trait object.
    pub fn cipher(&self) -> &dyn Cipher {
        match self {
            Key::Shift(c) => c,
            Key::Permutation(c) => c,
            Key::Vigenere(c) => c,
        }
    }
}

impl Cipher for Key {
    fn kind(&self) -> CipherKind {
        self.cipher().kind()
    }

    fn encode(&self, text: &str) -> String {
        self.cipher().encode(text)
    }

    fn decode(&self, text: &str) -> String {
        self.cipher().decode(text)
    }
}

impl From<ShiftCipher> for Key {
    fn from(c: ShiftCipher) -> Self {
        Key::Shift(c)
    }
}

impl From<PermutationCipher> for Key {
    fn from(c: PermutationCipher) -> Self {
        Key::Permutation(c)
    }
}

impl From<VigenereCipher> for Key {
    fn from(c: VigenereCipher) -> Self {
        Key::Vigenere(c)
    }
}

/// Encrypts `text` with whichever cipher `key` selects.
pub fn encode(text: &str, key: &Key) -> String {
    key.encode(text)
}

/// Decrypts `text` with whichever cipher `key` selects.
pub fn decode(text: &str, key: &Key) -> String {
    key.decode(text)
}
