//! Segment error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SegmentError {
    #[error("Selection invariant violated: {0}")]
    InvariantViolation(String),

    #[error("Segment index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Segment not found: {0}")]
    NotFound(String),

    #[error("Duplicate segment: {0}")]
    DuplicateSegment(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),
}
