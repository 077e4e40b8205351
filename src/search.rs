//! Exhaustive XOR key search.
//!
//! Every key of a fixed byte width is XORed against the ciphertext (the
//! key repeats if the ciphertext is longer) and the decoded bytes are kept
//! when a caller-supplied predicate accepts them. The search is lazy,
//! deterministic and stateless per key, so it can be restarted or split
//! into key ranges at will.
//!
//! Key bytes are the big-endian bytes of the key counter: for a 3-byte
//! width, key `0x0A0B0C` is `[0x0A, 0x0B, 0x0C]`.

use std::ops::Range;

use log::debug;
use serde::Serialize;

use crate::config::SearchConfig;
use crate::error::ClassicryptError;

/// A key accepted by the predicate, with its decoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Candidate {
    /// Key bytes, most significant first.
    pub key: Vec<u8>,
    /// Ciphertext XOR key.
    pub plaintext: Vec<u8>,
}

impl Candidate {
    /// The plaintext as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.plaintext).into_owned()
    }
}

/// `true` for `A..=Z` and `a..=z`.
pub fn is_ascii_letter(byte: u8) -> bool {
    byte.is_ascii_alphabetic()
}

/// Lifts a per-byte test to a whole-candidate predicate.
pub fn every_byte<F>(accept: F) -> impl Fn(&[u8]) -> bool + Clone
where
    F: Fn(u8) -> bool + Clone,
{
    move |plaintext: &[u8]| plaintext.iter().all(|&b| accept(b))
}

/// Lazy iterator over the keys whose decoding satisfies a predicate.
#[derive(Clone)]
pub struct XorKeySearch<'a, P> {
    ciphertext: &'a [u8],
    width: usize,
    keys: Range<u64>,
    next_key: u64,
    predicate: P,
}

impl<'a, P> XorKeySearch<'a, P>
where
    P: Fn(&[u8]) -> bool,
{
    /// Searches all `256^width` keys.
    ///
    /// # Parameters
    /// - `ciphertext`: Non-empty bytes to decode.
    /// - `config`: Key width; defaults to the ciphertext length.
    /// - `predicate`: Accepts or rejects a decoded candidate.
    ///
    /// # Errors
    /// Returns [`ClassicryptError::InvalidParameter`] for an empty
    /// ciphertext or a width outside `1..=4`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::config::SearchConfig;
    /// use classicrypt::search::{every_byte, is_ascii_letter, XorKeySearch};
    ///
    /// let search = XorKeySearch::new(&[0x20], &SearchConfig::default(), every_byte(is_ascii_letter)).unwrap();
    /// assert_eq!(search.count(), 52);
    /// ```
    pub fn new(
        ciphertext: &'a [u8],
        config: &SearchConfig,
        predicate: P,
    ) -> Result<Self, ClassicryptError> {
        let width = config.resolve_width(ciphertext)?;
        let keys = 0..key_space(width);
        debug!(
            "XOR search: {} byte ciphertext, {} byte keys, {} keys",
            ciphertext.len(),
            width,
            keys.end
        );
        Ok(XorKeySearch {
            ciphertext,
            width,
            next_key: keys.start,
            keys,
            predicate,
        })
    }

    /// Restricts the search to `range`, clamped to the key space.
    ///
    /// Disjoint ranges that cover the key space partition the results.
    pub fn with_key_range(mut self, range: Range<u64>) -> Self {
        let space = key_space(self.width);
        let start = range.start.min(space);
        let end = range.end.clamp(start, space);
        self.keys = start..end;
        self.next_key = start;
        self
    }

    /// Rewinds to the first key of the range.
    pub fn restart(&mut self) {
        self.next_key = self.keys.start;
    }

    /// Key width in bytes.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of keys this search enumerates.
    pub fn key_count(&self) -> u64 {
        self.keys.end - self.keys.start
    }

    fn try_key(&self, key: u64) -> Option<Candidate> {
        decode_with_key(self.ciphertext, self.width, key, &self.predicate)
    }
}

impl<P> Iterator for XorKeySearch<'_, P>
where
    P: Fn(&[u8]) -> bool,
{
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        while self.next_key < self.keys.end {
            let key = self.next_key;
            self.next_key += 1;
            if let Some(candidate) = self.try_key(key) {
                return Some(candidate);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.keys.end - self.next_key;
        (0, usize::try_from(remaining).ok())
    }
}

fn key_space(width: usize) -> u64 {
    1u64 << (8 * width)
}

fn key_bytes(key: u64, width: usize) -> Vec<u8> {
    key.to_be_bytes()[8 - width..].to_vec()
}

fn decode_with_key<P>(ciphertext: &[u8], width: usize, key: u64, predicate: &P) -> Option<Candidate>
where
    P: Fn(&[u8]) -> bool + ?Sized,
{
    let key = key_bytes(key, width);
    let plaintext: Vec<u8> = ciphertext
        .iter()
        .zip(key.iter().cycle())
        .map(|(c, k)| c ^ k)
        .collect();
    if predicate(&plaintext) {
        Some(Candidate { key, plaintext })
    } else {
        None
    }
}

/// Runs the whole search on the rayon thread pool.
///
/// Results are ordered by key, identical to collecting [`XorKeySearch`].
///
/// # Errors
/// Same as [`XorKeySearch::new`].
#[cfg(feature = "parallel")]
pub fn par_search<P>(
    ciphertext: &[u8],
    config: &SearchConfig,
    predicate: P,
) -> Result<Vec<Candidate>, ClassicryptError>
where
    P: Fn(&[u8]) -> bool + Sync,
{
    use rayon::prelude::*;

    let width = config.resolve_width(ciphertext)?;
    debug!(
        "parallel XOR search: {} byte keys over {} threads",
        width,
        rayon::current_num_threads()
    );
    Ok((0..key_space(width))
        .into_par_iter()
        .filter_map(|key| decode_with_key(ciphertext, width, key, &predicate))
        .collect())
}
