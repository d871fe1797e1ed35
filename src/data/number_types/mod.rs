//! # Number types
//!
//! Vectors are defined over a field. This module defines what is needed of a field; concrete
//! number types are provided by the user, or come from the standard library.
pub mod traits;
