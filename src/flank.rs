/// The pair of symbols bordering one occurrence of a word.
///
/// `None` on either side means the occurrence touches that end of the
/// sequence. Equality compares both sides, so a boundary is never equal
/// to a real symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Flank<T> {
    /// Symbol immediately before the occurrence
    pub left: Option<T>,
    /// Symbol immediately after the occurrence
    pub right: Option<T>,
}

impl<T> Flank<T> {
    pub fn new(left: Option<T>, right: Option<T>) -> Self {
        Self { left, right }
    }
}

/// Collects the flank of every occurrence, in the order of `positions`.
///
/// Positions must satisfy `pos + length <= sequence.len()`.
pub fn get_encodings<T: Clone>(sequence: &[T], positions: &[usize], length: usize) -> Vec<Flank<T>> {
    positions
        .iter()
        .map(|&pos| flank_at(sequence, pos, length))
        .collect()
}

#[inline]
pub(crate) fn flank_at<T: Clone>(sequence: &[T], pos: usize, length: usize) -> Flank<T> {
    let left = pos.checked_sub(1).map(|i| sequence[i].clone());
    let right = sequence.get(pos + length).cloned();
    Flank::new(left, right)
}

/// Returns true if at least two flanks differ.
///
/// A word whose occurrences all share one flank can be grown by a symbol
/// on that side and still occur at every position, so it is not maximal.
/// Comparing every flank against the first is enough: if all equal the
/// first, all pairs are equal.
pub fn is_maximal<T: PartialEq>(flanks: &[Flank<T>]) -> bool {
    match flanks.split_first() {
        Some((first, rest)) => rest.iter().any(|f| f != first),
        None => false,
    }
}
