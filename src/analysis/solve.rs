//! Keyword recovery for a Vigenère ciphertext of known period.
//!
//! Each column of the ciphertext was shifted by one keyword letter, so
//! the column is a Caesar ciphertext. The shift whose undone column best
//! fits English unigram frequencies (lowest chi-squared) is taken as that
//! column's keyword letter.

use log::debug;
use serde::Serialize;

use crate::error::ClassicryptError;
use crate::utils::letters::{index_to_letter, letters_upper, ALPHABET_LEN};

/// English unigram frequencies, `a` to `z`.
pub const ENGLISH_FREQUENCIES: [f64; ALPHABET_LEN] = [
    0.08167, 0.01492, 0.02782, 0.04253, 0.12702, 0.02228, 0.02015, 0.06094, 0.06966, 0.00153,
    0.00772, 0.04025, 0.02406, 0.06749, 0.07507, 0.01929, 0.00095, 0.05987, 0.06327, 0.09056,
    0.02758, 0.00978, 0.02360, 0.00150, 0.01974, 0.00074,
];

/// A recovered keyword and how well it fits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordGuess {
    /// Keyword in lowercase, one letter per column.
    pub keyword: String,
    /// Sum of the per-column chi-squared scores; lower is a better fit.
    pub chi_squared: f64,
}

/// Chi-squared distance of `counts`, read as shifted forward by `shift`,
/// from English.
fn chi_squared(counts: &[usize; ALPHABET_LEN], shift: usize) -> f64 {
    let n: usize = counts.iter().sum();
    ENGLISH_FREQUENCIES
        .iter()
        .enumerate()
        .map(|(plain, &freq)| {
            let observed = counts[(plain + shift) % ALPHABET_LEN] as f64;
            let expected = freq * n as f64;
            let diff = observed - expected;
            diff * diff / expected
        })
        .sum()
}

/// The Caesar shift of a column of letter indices with the best English fit.
///
/// # Returns
/// `(shift, chi_squared)`; the smallest shift wins ties.
pub fn best_shift(column: &[usize]) -> (usize, f64) {
    let mut counts = [0usize; ALPHABET_LEN];
    for &i in column {
        counts[i % ALPHABET_LEN] += 1;
    }
    (0..ALPHABET_LEN)
        .map(|shift| (shift, chi_squared(&counts, shift)))
        .fold((0, f64::INFINITY), |best, candidate| {
            if candidate.1 < best.1 {
                candidate
            } else {
                best
            }
        })
}

/// Recovers the keyword of a Vigenère ciphertext whose period is known.
///
/// Non-letters are dropped before the letters are dealt into
/// `key_length` columns, matching a cipher whose key advances on letters only.
///
/// # Errors
/// Returns [`ClassicryptError::InvalidParameter`] if `key_length == 0` or
/// the ciphertext contains no letters.
pub fn recover_keyword(ciphertext: &str, key_length: usize) -> Result<KeywordGuess, ClassicryptError> {
    if key_length == 0 {
        return Err(ClassicryptError::InvalidParameter(
            "key_length must be at least 1".into(),
        ));
    }
    let letters: Vec<usize> = letters_upper(ciphertext)
        .bytes()
        .map(|b| (b - b'A') as usize)
        .collect();
    if letters.is_empty() {
        return Err(ClassicryptError::InvalidParameter(
            "ciphertext contains no letters".into(),
        ));
    }

    let mut keyword = String::with_capacity(key_length);
    let mut total = 0.0;
    for col in 0..key_length {
        let column: Vec<usize> = letters.iter().skip(col).step_by(key_length).copied().collect();
        if column.is_empty() {
            keyword.push('a');
            continue;
        }
        let (shift, score) = best_shift(&column);
        keyword.push(index_to_letter(shift, false));
        total += score;
    }
    debug!(
        "recovered keyword {:?} for period {} (chi-squared {:.2})",
        keyword, key_length, total
    );
    Ok(KeywordGuess {
        keyword,
        chi_squared: total,
    })
}
