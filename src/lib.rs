//! # maxrep - Maximal Repeat Detection
//!
//! Finds the maximal repeats of a symbol sequence: words occurring at two
//! or more positions whose occurrences cannot all be extended by the same
//! symbol on the left or on the right.
//!
//! Each [`Repeat`] carries the word, its ascending start positions and the
//! [`Flank`] (left and right neighbour, `None` at a sequence boundary) of
//! every occurrence. The search is alphabet-agnostic: any `Hash + Eq +
//! Clone` symbol type works.
//!
//! ## Example
//!
//! ```
//! use maxrep::find_repeats;
//!
//! let repeats = find_repeats(b"GATCGATC", 4, Some(4), true);
//!
//! // "GATC" is reported at each of its two starts
//! assert_eq!(repeats.len(), 2);
//! assert_eq!(repeats[0].word(), b"GATC");
//! assert_eq!(repeats[0].positions(), &[0, 4]);
//! ```
//!
//! ## Ordering
//!
//! Results are ordered by length ascending, then by start ascending. Every
//! start of a maximal word gives its own record, so a word occurring k
//! times appears k times. The order is deterministic and identical for
//! the sequential and the parallel search.

mod error;
mod finder;
mod flank;
mod index;
mod iter;
mod overlap;
mod repeat;

pub mod fasta;
pub mod report;


pub use error::{RepeatError, Result};
pub use finder::{find_repeats, RepeatFinder, SearchParams, DEFAULT_MIN_LEN};
pub use flank::{get_encodings, is_maximal, Flank};
pub use iter::RepeatIter;
pub use overlap::filter_non_overlapping;
pub use repeat::Repeat;
