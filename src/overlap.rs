use crate::repeat::Repeat;
use log::debug;

/// Keeps only the repeats whose own occurrences do not overlap.
///
/// A repeat is kept whole or dropped whole; overlaps between different
/// repeats are not considered. Order is preserved, so applying the
/// filter twice gives the same result as applying it once.
pub fn filter_non_overlapping<T>(repeats: Vec<Repeat<T>>) -> Vec<Repeat<T>> {
    let before = repeats.len();
    let kept: Vec<Repeat<T>> = repeats
        .into_iter()
        .filter(Repeat::is_non_overlapping)
        .collect();
    debug!(
        "overlap filter kept {} of {} repeats",
        kept.len(),
        before
    );
    kept
}
