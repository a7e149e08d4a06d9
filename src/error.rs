//! Error values reported by `RingBuffer` operations.

use thiserror::Error;

/// Error value describing a rejected `RingBuffer` call.
///
/// Every variant is a caller-input error: the offending call is rejected
/// before any state change, so the buffer is left exactly as it was.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// The buffer holds no elements.
    #[error("buffer is empty")]
    Empty,

    /// A logical index or requested size fell outside its valid range.
    #[error("index {index} out of range (bound {bound})")]
    OutOfRange {
        /// The offending index or size.
        index: usize,
        /// The largest value the operation would have accepted, plus one
        /// for exclusive bounds (`at`, `rotate`) or as-is for inclusive
        /// bounds (`insert`, `resize`).
        bound: usize,
    },

    /// An erase range `[first, last)` was not a sub-range of the buffer.
    #[error("range {first}..{last} invalid for length {len}")]
    InvalidRange {
        /// Start of the rejected range.
        first: usize,
        /// One-past-the-end of the rejected range.
        last: usize,
        /// Buffer length at the time of the call.
        len: usize,
    },

    /// Two buffers of different capacities were asked to swap storage.
    #[error("cannot swap buffers of capacity {left} and {right}")]
    CapacityMismatch {
        /// Capacity of the buffer `swap` was called on.
        left: usize,
        /// Capacity of the other buffer.
        right: usize,
    },
}
