//! Statistical cryptanalysis of classical ciphers.
//!
//! [`frequency`] counts letters and computes the Index of Coincidence,
//! [`key_length`] estimates the period of a polyalphabetic cipher, and
//! [`solve`] recovers a Vigenère keyword once the period is known.

pub mod frequency;
pub mod key_length;
pub mod solve;

pub use frequency::{index_of_coincidence, letter_frequency, FrequencyTable};
pub use key_length::{
    average_ic_for_key_length, ic_scan, kasiski_examination, IcScore, KasiskiOutcome,
    KasiskiReport,
};
pub use solve::{recover_keyword, KeywordGuess};

/// Index of Coincidence typical of English text.
pub const ENGLISH_IC: f64 = 0.0667;

/// Index of Coincidence of uniformly random letters, `1/26`.
pub const RANDOM_IC: f64 = 1.0 / 26.0;
