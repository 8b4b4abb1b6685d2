use crate::error::{RepeatError, Result};
use crate::iter::RepeatIter;
use crate::overlap::filter_non_overlapping;
use crate::repeat::Repeat;
use log::info;
use rayon::prelude::*;
use std::hash::Hash;
use std::ops::RangeInclusive;

/// Default lower bound on repeat length.
pub const DEFAULT_MIN_LEN: usize = 20;

/// Parameters of a repeat search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    /// Shortest repeat length searched, inclusive
    pub min_len: usize,
    /// Longest repeat length searched, inclusive; `None` or `Some(0)` means
    /// the sequence length
    pub max_len: Option<usize>,
    /// Drop repeats whose own occurrences overlap
    pub no_overlap: bool,
    /// Search lengths on the rayon thread pool
    pub parallel: bool,
}

impl SearchParams {
    /// Creates validated parameters.
    ///
    /// Fails with [`RepeatError::InvalidRange`] if `min_len` is zero or
    /// greater than a non-zero `max_len`.
    pub fn new(min_len: usize, max_len: Option<usize>) -> Result<Self> {
        let params = Self {
            min_len,
            max_len,
            ..Self::default()
        };
        params.validate()?;
        Ok(params)
    }

    pub fn no_overlap(mut self, no_overlap: bool) -> Self {
        self.no_overlap = no_overlap;
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Checks the range itself, independent of any sequence.
    pub fn validate(&self) -> Result<()> {
        let invalid = self.min_len == 0 || self.max_bound().is_some_and(|max| self.min_len > max);
        if invalid {
            return Err(RepeatError::InvalidRange {
                min_len: self.min_len,
                max_len: self.max_len.unwrap_or(0),
            });
        }
        Ok(())
    }

    /// Checks the range against a sequence of `seq_len` symbols, rejecting
    /// bounds longer than the sequence.
    ///
    /// [`RepeatFinder::search`] does not apply this check; it clamps
    /// oversized bounds like the lenient path.
    pub fn validate_for(&self, seq_len: usize) -> Result<()> {
        if seq_len == 0 {
            return Err(RepeatError::EmptySequence);
        }
        self.validate()?;

        let longest = self.max_bound().unwrap_or(seq_len).max(self.min_len);
        if longest > seq_len {
            return Err(RepeatError::OutOfBounds {
                length: longest,
                seq_len,
            });
        }
        Ok(())
    }

    /// The lengths actually searched in a sequence of `seq_len` symbols.
    ///
    /// Malformed ranges collapse to an empty range and an oversized
    /// `max_len` is clamped to the sequence length.
    pub(crate) fn lengths(&self, seq_len: usize) -> RangeInclusive<usize> {
        if self.min_len == 0 {
            return RangeInclusive::new(1, 0);
        }
        let max_len = self.max_bound().unwrap_or(seq_len).min(seq_len);
        self.min_len..=max_len
    }

    /// The explicit upper bound, if any. Zero counts as no bound.
    fn max_bound(&self) -> Option<usize> {
        self.max_len.filter(|&max| max > 0)
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            min_len: DEFAULT_MIN_LEN,
            max_len: None,
            no_overlap: false,
            parallel: false,
        }
    }
}

/// Finds the maximal repeats of a sequence.
///
/// Holds a borrowed sequence and the search parameters; the sequence is
/// never modified and nothing is cached between searches.
///
/// # Example
///
/// ```
/// use maxrep::{RepeatFinder, SearchParams};
///
/// let seq = b"GATCGATC";
/// let params = SearchParams::new(4, Some(4)).unwrap().no_overlap(true);
/// let repeats = RepeatFinder::with_params(seq, params).search().unwrap();
///
/// // one record per start of "GATC"
/// assert_eq!(repeats.len(), 2);
/// assert_eq!(repeats[0].word(), b"GATC");
/// assert_eq!(repeats[0].positions(), &[0, 4]);
/// assert_eq!(repeats[0], repeats[1]);
/// ```
pub struct RepeatFinder<'a, T> {
    sequence: &'a [T],
    params: SearchParams,
}

impl<'a, T: Hash + Eq + Clone + Send + Sync> RepeatFinder<'a, T> {
    /// Creates a finder with default parameters.
    pub fn new(sequence: &'a [T]) -> Self {
        Self::with_params(sequence, SearchParams::default())
    }

    pub fn with_params(sequence: &'a [T], params: SearchParams) -> Self {
        Self { sequence, params }
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Lazily yields maximal repeats in discovery order.
    ///
    /// The overlap filter is not applied; chain `filter` with
    /// [`Repeat::is_non_overlapping`] for the same effect.
    pub fn iter(&self) -> RepeatIter<'a, T> {
        RepeatIter::new(self.sequence, self.params.lengths(self.sequence.len()))
    }

    /// Runs the search, rejecting an empty sequence or a malformed range.
    ///
    /// Bounds longer than the sequence are clamped, so a `min_len` above
    /// the sequence length gives an empty result rather than an error.
    pub fn search(&self) -> Result<Vec<Repeat<T>>> {
        if self.sequence.is_empty() {
            return Err(RepeatError::EmptySequence);
        }
        self.params.validate()?;
        Ok(self.run())
    }

    /// Runs the search, treating malformed parameters as an empty search.
    pub fn run(&self) -> Vec<Repeat<T>> {
        let lengths = self.params.lengths(self.sequence.len());

        let mut repeats = if self.params.parallel {
            self.run_parallel(lengths.clone())
        } else {
            RepeatIter::new(self.sequence, lengths.clone()).collect()
        };

        if self.params.no_overlap {
            repeats = filter_non_overlapping(repeats);
        }

        info!(
            "found {} maximal repeats for lengths {:?} in {} symbols",
            repeats.len(),
            lengths,
            self.sequence.len()
        );
        repeats
    }

    /// One task per length; per-length results are concatenated in
    /// ascending length order so the output matches the sequential run.
    fn run_parallel(&self, lengths: RangeInclusive<usize>) -> Vec<Repeat<T>> {
        let sequence = self.sequence;
        let per_length: Vec<Vec<Repeat<T>>> = lengths
            .into_par_iter()
            .map(|length| RepeatIter::new(sequence, length..=length).collect())
            .collect();
        per_length.concat()
    }
}

/// Finds all maximal repeats with lengths in `min_len..=max_len`.
///
/// Every `(length, start)` candidate whose word occurs at least twice
/// and is maximal gives one record, so a word occurring k times appears
/// k times, in order of its starts.
///
/// A `max_len` of `None` or `Some(0)` means the sequence length. A
/// malformed range (zero `min_len`, `min_len > max_len`) gives an empty
/// result rather than an error, and lengths beyond the sequence are
/// skipped. With `no_overlap`, repeats whose
/// occurrences overlap each other are dropped.
///
/// ```
/// let repeats = maxrep::find_repeats(b"ATATA", 2, Some(2), false);
/// let words: Vec<&[u8]> = repeats.iter().map(|r| r.word()).collect();
/// assert_eq!(words, vec![&b"AT"[..], &b"TA"[..], &b"AT"[..], &b"TA"[..]]);
/// ```
pub fn find_repeats<T: Hash + Eq + Clone>(
    sequence: &[T],
    min_len: usize,
    max_len: Option<usize>,
    no_overlap: bool,
) -> Vec<Repeat<T>> {
    let params = SearchParams {
        min_len,
        max_len,
        no_overlap,
        parallel: false,
    };
    let repeats: Vec<Repeat<T>> = RepeatIter::new(sequence, params.lengths(sequence.len())).collect();
    if no_overlap {
        filter_non_overlapping(repeats)
    } else {
        repeats
    }
}
