//! Key length estimation for periodic polyalphabetic ciphers.
//!
//! Two independent estimators over the same ciphertext:
//!
//! - **IC scan**: splits the text into `k` interleaved columns for each
//!   candidate `k` and reports the average Index of Coincidence. Columns
//!   of the right period behave like a monoalphabetic text, so their IC
//!   rises toward natural-language values.
//! - **Kasiski examination**: collects distances between consecutive
//!   occurrences of repeated substrings and counts how many distances
//!   each candidate length divides.

use std::collections::BTreeMap;

use log::{debug, trace};
use serde::Serialize;

use crate::analysis::frequency::index_of_coincidence;
use crate::config::AnalysisConfig;
use crate::error::ClassicryptError;
use crate::utils::letters::strip_whitespace_upper;

/// Average Index of Coincidence of the columns for one key length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IcScore {
    /// Candidate key length.
    pub key_length: usize,
    /// Mean IC over the columns holding at least two letters.
    pub average_ic: f64,
}

/// Average IC of the `k` interleaved columns of `ciphertext`.
///
/// The text is stripped of whitespace and uppercased; the character at
/// index `i` of the stripped text belongs to column `i mod k`. Only letters
/// are kept in a column. Columns with fewer than two letters are left out
/// of the average rather than counted as zero.
///
/// # Returns
/// The mean column IC, or `0.0` when `k == 0` or no column qualifies.
pub fn average_ic_for_key_length(ciphertext: &str, k: usize) -> f64 {
    if k == 0 {
        return 0.0;
    }
    let cleaned = strip_whitespace_upper(ciphertext);
    let mut columns = vec![String::new(); k];
    for (i, c) in cleaned.chars().enumerate() {
        if c.is_ascii_uppercase() {
            columns[i % k].push(c);
        }
    }
    let ics: Vec<f64> = columns
        .iter()
        .filter(|col| col.len() >= 2)
        .map(String::as_str)
        .map(index_of_coincidence)
        .collect();
    if ics.is_empty() {
        return 0.0;
    }
    ics.iter().sum::<f64>() / ics.len() as f64
}

/// Scores every key length in `1..=config.ic_scan_max_key_length` by
/// average column IC.
///
/// The result is in key-length order; nothing is auto-selected. Use
/// [`rank_by_ic`] or [`closest_to`] to interpret it.
///
/// # Errors
/// Returns [`ClassicryptError::InvalidParameter`] if `config` fails
/// [`AnalysisConfig::validate`].
///
/// # Examples
///
/// ```
/// use classicrypt::analysis::ic_scan;
/// use classicrypt::config::AnalysisConfig;
///
/// let config = AnalysisConfig { ic_scan_max_key_length: 4, ..AnalysisConfig::default() };
/// let scores = ic_scan("ABCABCABCABC", &config).unwrap();
/// assert_eq!(scores.len(), 4);
/// assert_eq!(scores[2].average_ic, 1.0);
/// ```
pub fn ic_scan(ciphertext: &str, config: &AnalysisConfig) -> Result<Vec<IcScore>, ClassicryptError> {
    config.validate()?;
    let max_key_length = config.ic_scan_max_key_length;
    debug!(
        "IC scan over {} characters for key lengths 1..={}",
        ciphertext.len(),
        max_key_length
    );
    let scores = (1..=max_key_length)
        .map(|key_length| {
            let average_ic = average_ic_for_key_length(ciphertext, key_length);
            trace!("key length {}: average IC {:.4}", key_length, average_ic);
            IcScore {
                key_length,
                average_ic,
            }
        })
        .collect();
    Ok(scores)
}

/// Sorts scores by descending IC; equal scores keep the shorter length first.
pub fn rank_by_ic(scores: &[IcScore]) -> Vec<IcScore> {
    let mut ranked = scores.to_vec();
    ranked.sort_by(|a, b| {
        b.average_ic
            .total_cmp(&a.average_ic)
            .then(a.key_length.cmp(&b.key_length))
    });
    ranked
}

/// The score whose IC is nearest `target_ic`, first on ties.
///
/// Pass [`ENGLISH_IC`](crate::analysis::ENGLISH_IC) to look for the period
/// of an English plaintext.
pub fn closest_to(scores: &[IcScore], target_ic: f64) -> Option<IcScore> {
    scores.iter().copied().reduce(|best, s| {
        if (s.average_ic - target_ic).abs() < (best.average_ic - target_ic).abs() {
            s
        } else {
            best
        }
    })
}

/// Every substring of length `min_len..=max_len` that occurs more than
/// once, mapped to its ascending start positions.
///
/// `text` is used as given; callers clean it first. A `min_len` of zero is
/// treated as one, since the empty substring never counts as a repeat.
pub fn repeated_sequences(text: &str, min_len: usize, max_len: usize) -> BTreeMap<String, Vec<usize>> {
    let chars: Vec<char> = text.chars().collect();
    let mut positions: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for len in min_len.max(1)..=max_len {
        if len > chars.len() {
            break;
        }
        for (start, window) in chars.windows(len).enumerate() {
            positions
                .entry(window.iter().collect())
                .or_default()
                .push(start);
        }
    }
    positions.retain(|_, starts| starts.len() > 1);
    positions
}

/// Distances between consecutive occurrences of each repeated substring,
/// sorted ascending. Non-adjacent pairs are not included.
pub fn consecutive_distances(repeats: &BTreeMap<String, Vec<usize>>) -> Vec<usize> {
    let mut distances: Vec<usize> = repeats
        .values()
        .flat_map(|starts| starts.windows(2).map(|pair| pair[1] - pair[0]))
        .collect();
    distances.sort_unstable();
    distances
}

/// For each `k` in `2..=max_key_length`, how many distances `k` divides.
///
/// The returned vector is indexed by `k`; entries `0` and `1` are always zero.
pub fn count_divisible_distances(distances: &[usize], max_key_length: usize) -> Vec<usize> {
    let mut counts = vec![0usize; max_key_length + 1];
    for &d in distances {
        for (k, count) in counts.iter_mut().enumerate().skip(2) {
            if d.is_multiple_of(k) {
                *count += 1;
            }
        }
    }
    counts
}

/// Result of a Kasiski examination that found repeats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KasiskiReport {
    /// Candidate with the most divisible distances; smallest on ties.
    pub likely_key_length: usize,
    /// `(k, count)` for every `k` in `2..=max_key_length`.
    pub divisor_counts: Vec<(usize, usize)>,
    /// Consecutive-occurrence distances, ascending.
    pub distances: Vec<usize>,
}

impl KasiskiReport {
    /// Divisibility count for `key_length`, zero when outside the scanned range.
    pub fn count_for(&self, key_length: usize) -> usize {
        self.divisor_counts
            .iter()
            .find(|(k, _)| *k == key_length)
            .map_or(0, |&(_, n)| n)
    }
}

/// Outcome of [`kasiski_examination`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum KasiskiOutcome {
    /// Repeats were found and a key length was scored.
    Estimate(KasiskiReport),
    /// The text holds no repeated substring in the configured length range.
    NoRepeatedSequence,
}

impl KasiskiOutcome {
    /// The report, if an estimate exists.
    pub fn report(&self) -> Option<&KasiskiReport> {
        match self {
            KasiskiOutcome::Estimate(report) => Some(report),
            KasiskiOutcome::NoRepeatedSequence => None,
        }
    }

    /// The likely key length, if an estimate exists.
    pub fn likely_key_length(&self) -> Option<usize> {
        self.report().map(|r| r.likely_key_length)
    }
}

/// Runs the Kasiski examination on `ciphertext`.
///
/// The text is stripped of whitespace and uppercased. Substrings of length
/// `config.min_substring_len..=config.max_substring_len` are collected,
/// distances between consecutive occurrences are recorded, and each
/// candidate `k` in `2..=config.max_key_length` is scored by how many
/// distances it divides.
///
/// # Errors
/// Returns [`ClassicryptError::InvalidParameter`] if `config` fails
/// [`AnalysisConfig::validate`].
///
/// # Examples
///
/// ```
/// use classicrypt::analysis::{kasiski_examination, KasiskiOutcome};
/// use classicrypt::config::AnalysisConfig;
///
/// let outcome = kasiski_examination("ABCXXABCXXABC", &AnalysisConfig::default()).unwrap();
/// assert_eq!(outcome.likely_key_length(), Some(5));
///
/// let none = kasiski_examination("ABCDEFG", &AnalysisConfig::default()).unwrap();
/// assert_eq!(none, KasiskiOutcome::NoRepeatedSequence);
/// ```
pub fn kasiski_examination(
    ciphertext: &str,
    config: &AnalysisConfig,
) -> Result<KasiskiOutcome, ClassicryptError> {
    config.validate()?;
    let cleaned = strip_whitespace_upper(ciphertext);
    let repeats = repeated_sequences(
        &cleaned,
        config.min_substring_len,
        config.max_substring_len,
    );
    let distances = consecutive_distances(&repeats);
    if distances.is_empty() {
        debug!(
            "Kasiski: no repeated sequences of length {}..={} in {} characters",
            config.min_substring_len,
            config.max_substring_len,
            cleaned.chars().count()
        );
        return Ok(KasiskiOutcome::NoRepeatedSequence);
    }

    let counts = count_divisible_distances(&distances, config.max_key_length);
    let likely_key_length = (3..=config.max_key_length).fold(2, |best, k| {
        if counts[k] > counts[best] {
            k
        } else {
            best
        }
    });
    debug!(
        "Kasiski: {} repeated sequences, {} distances, likely key length {}",
        repeats.len(),
        distances.len(),
        likely_key_length
    );

    Ok(KasiskiOutcome::Estimate(KasiskiReport {
        likely_key_length,
        divisor_counts: (2..=config.max_key_length).map(|k| (k, counts[k])).collect(),
        distances,
    }))
}
