//! # Linear algebra primitives
//!
//! Linear algebra primitives used to represent data in a sparse format.
pub use pair::IndexValuePair;

pub mod pair;
pub mod vector;
