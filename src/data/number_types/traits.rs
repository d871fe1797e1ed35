//! # Traits
//!
//! The sparse vector is defined over a field. The contract that the `Field` trait describes is
//! "mathematically exact", but the implementations aren't: floating point types satisfy it only
//! up to rounding. This is a fundamental problem of finite representation that the vector does not
//! try to solve.
use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Neg};

/// Basic field operations, as consumed by the sparse vector.
///
/// All operations are pure: they never change the receiver and always produce a new value.
///
/// The additive identity is deliberately not part of this trait. It is handed to a vector at
/// construction time, such that fields whose zero depends on run-time data (like a modulus) can be
/// used. Equality is value equality (`PartialEq`), and is what the vector uses to recognize zero.
pub trait Field: PartialEq + Clone + Display + Debug {
    /// First operation.
    fn sum(&self, other: &Self) -> Self;
    /// Second operation.
    fn prod(&self, other: &Self) -> Self;
    /// Additive inverse.
    fn sym(&self) -> Self;
}

/// Automatically implemented for all types whose references support the arithmetic operators.
impl<T> Field for T
where
    T: PartialEq + Clone + Display + Debug,
    for<'r> &'r T: Add<&'r T, Output=T> + Mul<&'r T, Output=T> + Neg<Output=T>,
{
    fn sum(&self, other: &Self) -> Self {
        self + other
    }

    fn prod(&self, other: &Self) -> Self {
        self * other
    }

    fn sym(&self) -> Self {
        -self
    }
}
