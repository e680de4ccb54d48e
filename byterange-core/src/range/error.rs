use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("range start {start} is past the end of a {len} byte buffer")]
    StartOutOfBounds { start: u64, len: u64 },

    #[error("range start {start} is after range end {end}")]
    InvertedBounds { start: u64, end: u64 },
}
