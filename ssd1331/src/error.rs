//! Error types.
//!
//! Coordinates never produce errors: pixel operations ignore points off the
//! panel and region operations clip. What's left is data of the wrong size and
//! whatever the transport reports.

use core::fmt;

/// A byte slice didn't have the length its destination requires.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LengthError {
    pub expected: usize,
    pub actual: usize,
}

impl fmt::Display for LengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {} bytes, got {}", self.expected, self.actual)
    }
}

/// Errors reported by `Display`, generic over the transport's error type.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error<E> {
    /// The transport failed; passed through unchanged.
    Transport(E),
    /// Replacement framebuffer contents had the wrong length. The
    /// framebuffer was not modified.
    BufferLength(LengthError),
}

impl<E> From<LengthError> for Error<E> {
    fn from(e: LengthError) -> Self {
        Error::BufferLength(e)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(e) => write!(f, "transport error: {:?}", e),
            Error::BufferLength(e) => write!(f, "bad framebuffer length: {}", e),
        }
    }
}
