use ahash::AHashMap as HashMap;
use std::hash::Hash;

/// Occurrence index for all words of one fixed length.
///
/// Maps each distinct word (borrowed from the sequence) to the ascending
/// list of positions where it starts. Building it is a single left to
/// right pass, so position lists come out sorted without a separate sort.
pub(crate) struct OccurrenceIndex<'a, T> {
    length: usize,
    occurrences: HashMap<&'a [T], Vec<usize>>,
}

impl<'a, T: Hash + Eq> OccurrenceIndex<'a, T> {
    /// Indexes every window of `length` symbols in `sequence`.
    ///
    /// An empty index is produced when `length` is zero or longer than
    /// the sequence.
    pub(crate) fn build(sequence: &'a [T], length: usize) -> Self {
        let mut occurrences: HashMap<&'a [T], Vec<usize>> = HashMap::default();

        if length > 0 {
            for (start, window) in sequence.windows(length).enumerate() {
                occurrences.entry(window).or_default().push(start);
            }
        }

        Self {
            length,
            occurrences,
        }
    }

    /// Positions where `word` starts, or an empty slice.
    pub(crate) fn positions(&self, word: &[T]) -> &[usize] {
        self.occurrences
            .get(word)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub(crate) fn length(&self) -> usize {
        self.length
    }

    /// Number of distinct words of this length.
    pub(crate) fn distinct_words(&self) -> usize {
        self.occurrences.len()
    }
}
