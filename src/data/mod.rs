//! # Storing of vectors in memory
//!
//! This module provides the data structures used to represent sparse vectors in memory, and the
//! number types they are defined over.
pub mod linear_algebra;
pub mod number_types;
