//! Error types for container and graph operations.
//!
//! Errors are split by the layer that reports them:
//!
//! - **`SequenceError`**: indexing problems on a [`Sequence`](crate::Sequence)
//!   (out-of-range index, access to an empty container).
//! - **`GraphError`**: violated algorithm preconditions (unknown vertex,
//!   unreachable destination, exhausted iteration budget, ...).
//!
//! Policy rejections (a duplicate or null value refused by a container) are
//! *not* errors. They are reported as `false` from the mutating call so batch
//! operations can report partial success.

use crate::graph::{EdgeId, VertexId};
use thiserror::Error;

/// Result type for graph operations.
pub type Result<T, E = GraphError> = std::result::Result<T, E>;

/// Errors reported by [`Sequence`](crate::Sequence) accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// Index outside `[0, len)` (or `[0, len]` for insertion).
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The logical length at the time of the call.
        len: usize,
    },

    /// `first`/`last` on a zero-length sequence.
    #[error("sequence is empty")]
    Empty,
}

/// Errors reported by graph construction and graph algorithms.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// A vertex argument is not part of the graph.
    #[error("vertex {0} is not part of the graph")]
    VertexNotFound(VertexId),

    /// An edge argument is not part of the graph.
    #[error("edge {0} is not part of the graph")]
    EdgeNotFound(EdgeId),

    /// No path leads from `start` to `destination`.
    #[error("vertex {destination} is unreachable from {start}")]
    Unreachable {
        /// Start of the requested path.
        start: VertexId,
        /// End of the requested path.
        destination: VertexId,
    },

    /// Color numbers below `-1` are invalid.
    #[error("invalid color number {0}, colors must be >= -1")]
    InvalidColor(i64),

    /// The distance function returned a negative weight.
    #[error("negative weight between {from} and {to}")]
    NegativeWeight {
        /// Tail of the weighted pair.
        from: VertexId,
        /// Head of the weighted pair.
        to: VertexId,
    },

    /// An algorithm ran past its configured iteration cap.
    #[error("iteration limit of {limit} exceeded")]
    IterationLimitExceeded {
        /// The configured cap.
        limit: usize,
    },

    /// An underlying container access failed.
    #[error(transparent)]
    Sequence(#[from] SequenceError),
}
