use crate::flank::{get_encodings, is_maximal};
use crate::index::OccurrenceIndex;
use crate::repeat::Repeat;
use log::{debug, trace};
use std::hash::Hash;
use std::ops::RangeInclusive;

/// Lazy iterator over the maximal repeats of a sequence.
///
/// Candidates are visited by length ascending, then by start ascending,
/// and every `(length, start)` candidate that passes the maximality test
/// yields its own record. A word occurring k times is therefore emitted
/// k times, once per start. One occurrence index is alive at a time,
/// built when the iterator moves on to the next length.
pub struct RepeatIter<'a, T> {
    sequence: &'a [T],
    lengths: RangeInclusive<usize>,
    index: Option<OccurrenceIndex<'a, T>>,
    start: usize,
    emitted: usize,
}

impl<'a, T: Hash + Eq + Clone> RepeatIter<'a, T> {
    /// Creates an iterator over the given lengths.
    ///
    /// Lengths of zero or beyond the sequence length produce nothing.
    pub(crate) fn new(sequence: &'a [T], lengths: RangeInclusive<usize>) -> Self {
        Self {
            sequence,
            lengths,
            index: None,
            start: 0,
            emitted: 0,
        }
    }

    /// Advances to the next length that can hold a word, building its index.
    ///
    /// Returns false when no lengths remain.
    fn advance_length(&mut self) -> bool {
        for length in self.lengths.by_ref() {
            if length == 0 || length > self.sequence.len() {
                continue;
            }
            let index = OccurrenceIndex::build(self.sequence, length);
            debug!(
                "length {}: {} distinct words over {} windows",
                length,
                index.distinct_words(),
                self.sequence.len() - length + 1
            );
            self.index = Some(index);
            self.start = 0;
            self.emitted = 0;
            return true;
        }
        false
    }

    /// Scans forward from `self.start` in the current index for the next
    /// maximal repeat.
    fn next_in_length(&mut self) -> Option<Repeat<T>> {
        let index = self.index.as_ref()?;
        let length = index.length();
        let last_start = self.sequence.len() - length;

        while self.start <= last_start {
            let start = self.start;
            self.start += 1;

            let word = &self.sequence[start..start + length];
            let positions = index.positions(word);

            if positions.len() < 2 {
                continue;
            }

            let flanks = get_encodings(self.sequence, positions, length);
            if is_maximal(&flanks) {
                trace!(
                    "maximal repeat of length {} at {} ({} occurrences)",
                    length,
                    start,
                    positions.len()
                );
                self.emitted += 1;
                return Some(Repeat::new(word.to_vec(), positions.to_vec(), flanks));
            }
        }

        debug!("length {}: {} maximal repeats", length, self.emitted);
        None
    }
}

impl<'a, T: Hash + Eq + Clone> Iterator for RepeatIter<'a, T> {
    type Item = Repeat<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(repeat) = self.next_in_length() {
                return Some(repeat);
            }
            self.index = None;
            if !self.advance_length() {
                return None;
            }
        }
    }
}
