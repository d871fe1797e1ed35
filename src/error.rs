//! # Error reporting for vector operations
//!
//! Most operations on a sparse vector are total. The ones that combine two vectors require equal
//! dimensions, and the checked setter reports indices that don't fit the vector.
use thiserror::Error;

/// Describes why an operation on a `SparseVector` was rejected.
///
/// The vector is left unchanged whenever one of these is returned.
#[derive(Error, Debug, Eq, PartialEq, Copy, Clone)]
pub enum VectorError {
    /// Two vectors were combined that don't have the same dimension.
    #[error("dimension mismatch: expected a vector of dimension {expected}, found {found}")]
    DimensionMismatch {
        /// Dimension of the receiving vector.
        expected: usize,
        /// Dimension of the argument.
        found: usize,
    },
    /// An index outside of `1..=dimension` was used.
    #[error("index {index} is out of range for a vector of dimension {dimension}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Dimension of the vector.
        dimension: usize,
    },
}
