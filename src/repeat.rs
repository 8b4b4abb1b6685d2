use crate::flank::Flank;

/// A maximal repeat found in a sequence.
///
/// Holds the repeated word, every start position at which it occurs
/// (ascending) and the flank of each occurrence, index-aligned with the
/// positions. Records are built by the finder and never mutated after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repeat<T> {
    word: Vec<T>,
    positions: Vec<usize>,
    flanks: Vec<Flank<T>>,
}

impl<T> Repeat<T> {
    pub(crate) fn new(word: Vec<T>, positions: Vec<usize>, flanks: Vec<Flank<T>>) -> Self {
        debug_assert!(positions.len() >= 2, "A repeat needs two occurrences");
        debug_assert_eq!(positions.len(), flanks.len());
        debug_assert!(
            positions.windows(2).all(|w| w[0] < w[1]),
            "Positions must be strictly ascending"
        );
        Self {
            word,
            positions,
            flanks,
        }
    }

    /// The repeated word.
    pub fn word(&self) -> &[T] {
        &self.word
    }

    /// Length of the word.
    pub fn len(&self) -> usize {
        self.word.len()
    }

    /// Always false: a repeat has at least one symbol.
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Start positions of every occurrence, ascending.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Flank of each occurrence, aligned with [`positions`](Self::positions).
    pub fn flanks(&self) -> &[Flank<T>] {
        &self.flanks
    }

    /// Number of occurrences.
    pub fn occurrences(&self) -> usize {
        self.positions.len()
    }

    /// Iterates `(position, flank)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Flank<T>)> {
        self.positions.iter().copied().zip(self.flanks.iter())
    }

    /// Returns true if no occurrence starts before the previous one ends.
    pub fn is_non_overlapping(&self) -> bool {
        let length = self.len();
        self.positions.windows(2).all(|w| w[0] + length <= w[1])
    }

    /// Decomposes the record into `(word, positions, flanks)`.
    pub fn into_parts(self) -> (Vec<T>, Vec<usize>, Vec<Flank<T>>) {
        (self.word, self.positions, self.flanks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flank::get_encodings;

    fn repeat_of(seq: &[u8], word: &[u8], positions: Vec<usize>) -> Repeat<u8> {
        let flanks = get_encodings(seq, &positions, word.len());
        Repeat::new(word.to_vec(), positions, flanks)
    }

    #[test]
    fn test_accessors() {
        let rep = repeat_of(b"GATCGATC", b"GATC", vec![0, 4]);
        assert_eq!(rep.word(), b"GATC");
        assert_eq!(rep.len(), 4);
        assert!(!rep.is_empty());
        assert_eq!(rep.positions(), &[0, 4]);
        assert_eq!(rep.occurrences(), 2);
        assert_eq!(rep.flanks().len(), 2);
    }

    #[test]
    fn test_iter_pairs_positions_with_flanks() {
        let rep = repeat_of(b"GATCGATC", b"GATC", vec![0, 4]);
        let pairs: Vec<_> = rep.iter().collect();
        assert_eq!(pairs[0], (0, &Flank::new(None, Some(b'G'))));
        assert_eq!(pairs[1], (4, &Flank::new(Some(b'C'), None)));
    }

    #[test]
    fn test_adjacent_occurrences_do_not_overlap() {
        let rep = repeat_of(b"GATCGATC", b"GATC", vec![0, 4]);
        assert!(rep.is_non_overlapping());
    }

    #[test]
    fn test_overlapping_occurrences() {
        let rep = repeat_of(b"AAAA", b"AA", vec![0, 1, 2]);
        assert!(!rep.is_non_overlapping());
    }

    #[test]
    fn test_into_parts() {
        let rep = repeat_of(b"ATAT", b"AT", vec![0, 2]);
        let (word, positions, flanks) = rep.into_parts();
        assert_eq!(word, b"AT".to_vec());
        assert_eq!(positions, vec![0, 2]);
        assert_eq!(flanks.len(), 2);
    }
}
