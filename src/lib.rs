//! Classical cipher transforms and cryptanalysis.
//!
//! classicrypt implements the textbook pen-and-paper ciphers together with
//! the statistical tools used to break them. None of these ciphers offers
//! any security; the crate is meant for teaching and experimentation.
//!
//! # Architecture
//!
//! ```text
//! cipher    (shift | permutation | vigenere transforms, leaf)
//! analysis  (letter frequency, Index of Coincidence)
//!     └── key_length (IC scan + Kasiski examination)
//!     └── solve      (keyword recovery once the period is known)
//! search    (exhaustive XOR key search with a validity predicate)
//! ```
//!
//! # Examples
//!
//! Encrypt with a Vigenère key, estimate the period and recover the key:
//!
//! ```
//! use classicrypt::analysis::{kasiski_examination, recover_keyword};
//! use classicrypt::cipher::{Cipher, VigenereCipher};
//! use classicrypt::config::AnalysisConfig;
//!
//! let cipher = VigenereCipher::new("lemon").unwrap();
//! let plaintext = "attack at dawn attack at dusk attack again at noon then attack at dawn";
//! let ciphertext = cipher.encode(plaintext);
//! assert_eq!(cipher.decode(&ciphertext), plaintext);
//!
//! let outcome = kasiski_examination(&ciphertext, &AnalysisConfig::default()).unwrap();
//! assert_eq!(outcome.likely_key_length(), Some(5));
//!
//! let guess = recover_keyword(&ciphertext, 5).unwrap();
//! assert_eq!(guess.keyword.len(), 5);
//! ```
//!
//! Enumerate every 1-byte XOR key that decodes to a letter:
//!
//! ```
//! use classicrypt::config::SearchConfig;
//! use classicrypt::search::{every_byte, is_ascii_letter, XorKeySearch};
//!
//! let search = XorKeySearch::new(b"\x12", &SearchConfig::default(), every_byte(is_ascii_letter)).unwrap();
//! assert_eq!(search.count(), 52);
//! ```

#![deny(clippy::all)]

pub mod analysis;
pub mod cipher;
pub mod config;
pub mod error;
pub mod search;

pub(crate) mod utils;

pub use cipher::{decode, encode, Cipher, CipherKind, Key, OutputCase};
pub use error::{ClassicryptError, InvalidKeyReason};
