//! Error types for compacted array construction.

use thiserror::Error;

/// Error variants for compacted array operations.
///
/// Only construction can fail; lookups report absence as `None`, never as an
/// error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The index and element sequences passed to construction differ in length.
    #[error("index/element length mismatch: {indices} indices but {elements} elements")]
    IndexLengthMismatch {
        /// Number of indices supplied.
        indices: usize,
        /// Number of elements supplied.
        elements: usize,
    },

    /// An index was not strictly greater than its predecessor.
    #[error("index {index} at position {position} is not strictly ascending")]
    IndexNotAscending {
        /// Position of the offending index in the input sequence.
        position: usize,
        /// The offending index value.
        index: u32,
    },
}

/// A specialized Result type for compacted array operations.
pub type Result<T> = std::result::Result<T, Error>;
