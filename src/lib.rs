pub mod game;
pub mod pqueue;

#[cfg(test)]
mod validation;

use std::collections::TryReserveError;

/// Error types for pq operations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PqError {
    /// Invalid construction parameters: a zero step size, or a step size
    /// large enough that the first growth step could overflow the
    /// insertion-id space.
    BadConfig,
    /// `top()` was called on an empty queue.
    Empty,
    /// The allocator could not provide storage for a growth step. The
    /// queue is left exactly as it was before the failed insert.
    Alloc(TryReserveError),
    /// Every insertion id is in use by a live element, so ids cannot be
    /// consolidated. Requires `u64::MAX` live elements; unreachable in
    /// practice but reported rather than wrapped around.
    IdsExhausted,
}

impl std::fmt::Display for PqError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadConfig => write!(f, "invalid queue configuration"),
            Self::Empty => write!(f, "queue is empty"),
            Self::Alloc(e) => write!(f, "allocation failed: {e}"),
            Self::IdsExhausted => write!(f, "insertion-id space exhausted"),
        }
    }
}

impl std::error::Error for PqError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Alloc(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TryReserveError> for PqError {
    fn from(e: TryReserveError) -> Self {
        Self::Alloc(e)
    }
}

pub type PqResult<T> = Result<T, PqError>;
