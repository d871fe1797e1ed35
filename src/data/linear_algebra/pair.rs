//! # Index-value pairs
//!
//! The items stored in a sparse vector.
use std::fmt;

/// An immutable combination of an index and the value at that index.
///
/// Indices are 1-based, in line with the vectors that store these pairs.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub struct IndexValuePair<F> {
    index: usize,
    value: F,
}

impl<F> IndexValuePair<F> {
    /// Combine an index with a value.
    pub fn new(index: usize, value: F) -> Self {
        Self { index, value }
    }

    /// Position of the value in the vector.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The stored value.
    pub fn value(&self) -> &F {
        &self.value
    }

    /// Split the pair into its components.
    pub fn into_inner(self) -> (usize, F) {
        (self.index, self.value)
    }
}

impl<F> From<(usize, F)> for IndexValuePair<F> {
    fn from((index, value): (usize, F)) -> Self {
        Self::new(index, value)
    }
}

impl<F: fmt::Display> fmt::Display for IndexValuePair<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {})", self.index, self.value)
    }
}
