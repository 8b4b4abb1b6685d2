use thiserror::Error;

/// Errors surfaced by the strict search entry points and the I/O helpers.
///
/// The lenient [`find_repeats`](crate::find_repeats) never fails; it maps
/// every malformed range to an empty result.
#[derive(Debug, Error)]
pub enum RepeatError {
    #[error("invalid length range: min_len={min_len}, max_len={max_len}")]
    InvalidRange { min_len: usize, max_len: usize },

    #[error("repeat length {length} exceeds sequence length {seq_len}")]
    OutOfBounds { length: usize, seq_len: usize },

    #[error("sequence is empty")]
    EmptySequence,

    #[error("no sequence record found in {0}")]
    NoRecord(String),

    #[error("FASTA parse error: {0}")]
    Fasta(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RepeatError>;
