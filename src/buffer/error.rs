//! Buffer-level errors.

use crate::geometry::Rect;

/// A programmer error: an operation was attempted across two buffers of
/// differing shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum BufferError {
    #[error("buffer area mismatch: expected {expected:?}, got {actual:?}")]
    MismatchedAreas { expected: Rect, actual: Rect },
}
