//! Error types for manybody-sparse

use thiserror::Error;

/// Result type for sparse array operations
pub type Result<T> = std::result::Result<T, SparseArrayError>;

/// Errors that can occur when constructing or expanding sparse arrays
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SparseArrayError {
    /// Output buffer length does not match the dense size
    #[error("Dense buffer length mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A stored coordinate lies outside the declared dimensions
    #[error(
        "Malformed sparse array: entry {entry} has index {index} along axis {axis}, \
         which is out of bounds for extent {extent}"
    )]
    MalformedSparseArray {
        entry: usize,
        axis: usize,
        index: usize,
        extent: usize,
    },

    /// The flattened coordinate matrix has the wrong length
    #[error("Indices length must be nnz * rank = {expected}, got {actual}")]
    InvalidIndicesLength { expected: usize, actual: usize },

    /// The product of the dimension extents does not fit in usize
    #[error("Dense size of dimensions {dims:?} overflows usize")]
    DenseSizeOverflow { dims: Vec<usize> },
}
