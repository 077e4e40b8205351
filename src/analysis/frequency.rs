//! Letter frequency counting and Index of Coincidence.

use serde::Serialize;

use crate::utils::letters::{index_to_letter, letter_index, ALPHABET_LEN};

/// Occurrence count of every alphabet letter in a text.
///
/// All 26 letters are always present; absent letters count zero. Letters
/// are case-folded and every non-letter is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FrequencyTable {
    counts: [usize; ALPHABET_LEN],
}

impl FrequencyTable {
    /// Counts the letters of `text`.
    pub fn from_text(text: &str) -> Self {
        let mut counts = [0usize; ALPHABET_LEN];
        for i in text.chars().filter_map(letter_index) {
            counts[i] += 1;
        }
        FrequencyTable { counts }
    }

    /// Count for `letter` (either case); zero for non-letters.
    pub fn count(&self, letter: char) -> usize {
        letter_index(letter).map_or(0, |i| self.counts[i])
    }

    /// Raw counts in alphabet order.
    pub fn counts(&self) -> &[usize; ALPHABET_LEN] {
        &self.counts
    }

    /// Total number of letters counted.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Share of each letter in alphabet order; all zero for an empty table.
    pub fn relative(&self) -> [f64; ALPHABET_LEN] {
        let total = self.total();
        let mut shares = [0.0; ALPHABET_LEN];
        if total == 0 {
            return shares;
        }
        for (share, &n) in shares.iter_mut().zip(self.counts.iter()) {
            *share = n as f64 / total as f64;
        }
        shares
    }

    /// `(letter, count)` pairs from `'a'` to `'z'`.
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, &n)| (index_to_letter(i, false), n))
    }

    /// Index of Coincidence of the counted letters.
    ///
    /// `IC = sum(f_i * (f_i - 1)) / (N * (N - 1))`. The statistic is
    /// undefined below two letters; `0.0` is returned in that case.
    pub fn index_of_coincidence(&self) -> f64 {
        let n = self.total();
        if n < 2 {
            return 0.0;
        }
        let coincidences: usize = self.counts.iter().map(|&f| f * f.saturating_sub(1)).sum();
        coincidences as f64 / (n as f64 * (n - 1) as f64)
    }
}

/// Counts the letters of `text`, case-folded, ignoring non-letters.
///
/// # Examples
///
/// ```
/// use classicrypt::analysis::letter_frequency;
///
/// let table = letter_frequency("Hello, World!");
/// assert_eq!(table.count('l'), 3);
/// assert_eq!(table.count('z'), 0);
/// assert_eq!(table.total(), 10);
/// ```
pub fn letter_frequency(text: &str) -> FrequencyTable {
    FrequencyTable::from_text(text)
}

/// Index of Coincidence of the letters of `text`, in `[0, 1]`.
///
/// Returns `0.0` when `text` has fewer than two letters.
pub fn index_of_coincidence(text: &str) -> f64 {
    FrequencyTable::from_text(text).index_of_coincidence()
}
