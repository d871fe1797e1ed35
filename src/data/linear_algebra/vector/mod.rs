//! # Vector types
//!
//! A sparse vector over a field. It was written by hand, because it needs to store its values in
//! an ordered chain that allows for linear merges of two vectors.
pub use iter::Iter;
pub use sparse::SparseVector;

mod iter;
mod list;
mod sparse;
