//! Render-pipeline errors.

use crate::buffer::BufferError;

/// Everything that can go wrong inside [`super::Terminal::draw`]: either
/// the backend's own I/O failed, or the two buffers it diffed didn't
/// match (a programmer error, not a recoverable condition).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TerminalError<E>
where
    E: std::error::Error + 'static,
{
    #[error("backend I/O failed: {0}")]
    Io(#[source] E),
    #[error(transparent)]
    Buffer(#[from] BufferError),
}
