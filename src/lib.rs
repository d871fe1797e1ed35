//! # Sparse vectors over a field
//!
//! A vector of fixed dimension in which only the components that differ from zero are stored. The
//! stored components are kept in a chain ordered by index, such that two vectors can be combined
//! in a single pass over both.
//!
//! The vector is generic over the number type it stores, which only needs to behave like a field;
//! see `data::number_types::traits::Field`.
#![warn(missing_docs)]

pub mod data;
pub mod driver;
pub mod error;

pub use data::linear_algebra::IndexValuePair;
pub use data::linear_algebra::vector::SparseVector;
pub use data::number_types::traits::Field;
pub use error::VectorError;
