//! # Sparse vector
//!
//! Fixed dimension, indices start at `1`. Only values different from the zero element are stored,
//! in an ordered linked chain.
use std::cmp::Ordering;
use std::fmt;

use itertools::{EitherOrBoth, Itertools};
use log::{debug, trace};
use num_traits::{One, Zero};

use crate::data::linear_algebra::pair::IndexValuePair;
use crate::data::linear_algebra::vector::iter::Iter;
use crate::data::linear_algebra::vector::list::OrderedSparseList;
use crate::data::number_types::traits::Field;
use crate::error::VectorError;

/// A sparse vector over a field, using an ordered chain of (index, value) pairs as back-end.
///
/// Valid indices are `1` through `dimension`, inclusive. The zero element of the field is provided
/// at creation; it is returned for all indices that are not stored, and no value equal to it is
/// ever stored.
#[derive(Clone)]
pub struct SparseVector<F> {
    data: OrderedSparseList<F>,
    dimension: usize,
    zero: F,
}

impl<F> SparseVector<F> {
    /// Create a vector without any non-zero values.
    ///
    /// # Arguments
    ///
    /// * `dimension`: Number of components. Can't be changed afterwards.
    /// * `zero`: The additive identity of the field.
    pub fn new(dimension: usize, zero: F) -> Self {
        Self {
            data: OrderedSparseList::new(),
            dimension,
            zero,
        }
    }

    /// Number of components, stored or not.
    pub fn dim(&self) -> usize {
        self.dimension
    }

    /// Number of stored, non-zero components.
    pub fn els(&self) -> usize {
        self.data.len()
    }

    /// Whether no component is stored.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The zero element this vector was created with.
    pub fn zero(&self) -> &F {
        &self.zero
    }

    /// Iterate over the stored pairs by increasing index.
    pub fn iter(&self) -> Iter<'_, F> {
        self.data.iter()
    }

    fn in_range(&self, i: usize) -> bool {
        1 <= i && i <= self.dimension
    }

    fn check_dimension(&self, other: &Self) -> Result<(), VectorError> {
        if self.dimension == other.dimension {
            Ok(())
        } else {
            debug!(
                "Rejecting operation between vectors of dimension {} and {}",
                self.dimension, other.dimension,
            );
            Err(VectorError::DimensionMismatch {
                expected: self.dimension,
                found: other.dimension,
            })
        }
    }
}

impl<F: Zero> SparseVector<F> {
    /// Create a vector without any non-zero values, using the zero of the type.
    pub fn zeros(dimension: usize) -> Self {
        Self::new(dimension, F::zero())
    }
}

impl<F: Field> SparseVector<F> {
    /// Create a vector by setting each of the pairs in turn.
    ///
    /// Pairs with an index out of range or a zero value are skipped, and later pairs overwrite
    /// earlier pairs with the same index.
    pub fn from_pairs<I: IntoIterator<Item=(usize, F)>>(dimension: usize, zero: F, pairs: I) -> Self {
        let mut vector = Self::new(dimension, zero);
        for (i, value) in pairs {
            vector.set(i, value);
        }

        vector
    }

    /// Create a `SparseVector` representation of standard basis unit vector e_i.
    ///
    /// # Arguments
    ///
    /// * `i`: Only index where there should be a 1. Note that indexing starts at one, and runs
    /// through `dimension`.
    /// * `dimension`: Size of the `SparseVector`.
    #[must_use]
    pub fn standard_basis_vector(i: usize, dimension: usize) -> Self
    where
        F: Zero + One,
    {
        debug_assert!(1 <= i && i <= dimension);

        let mut vector = Self::zeros(dimension);
        vector.set(i, F::one());
        vector
    }

    /// Set the value at index `i` to `value`.
    ///
    /// Indices outside of `1..=dimension` are ignored. Setting the zero value removes the stored
    /// value at `i`, if there is one.
    pub fn set(&mut self, i: usize, value: F) {
        if !self.in_range(i) {
            trace!("Ignoring index {} for a vector of dimension {}", i, self.dimension);
            return;
        }

        if value == self.zero {
            self.data.remove(i);
            return;
        }

        match self.data.locate(i) {
            Some(slot) => {
                self.data.replace(slot, value);
            },
            None => self.data.insert_ordered(IndexValuePair::new(i, value)),
        }
    }

    /// Like `set`, but an index out of range is reported rather than ignored.
    pub fn try_set(&mut self, i: usize, value: F) -> Result<(), VectorError> {
        if self.in_range(i) {
            self.set(i, value);
            Ok(())
        } else {
            Err(VectorError::IndexOutOfRange { index: i, dimension: self.dimension })
        }
    }

    /// Retrieve the value at an index.
    ///
    /// # Return value
    ///
    /// The zero element if nothing is stored at `i`, also when `i` is out of range.
    pub fn get(&self, i: usize) -> &F {
        self.data.get(i).unwrap_or(&self.zero)
    }

    /// Add another vector to this one.
    ///
    /// Walks both chains once, in lock-step. Indices at which the sum equals zero are no longer
    /// stored afterwards.
    ///
    /// # Errors
    ///
    /// If the dimensions differ, in which case this vector is not changed.
    pub fn sum(&mut self, other: &SparseVector<F>) -> Result<(), VectorError> {
        self.check_dimension(other)?;

        let mut merged = Vec::with_capacity(self.data.len() + other.data.len());
        let mut left = self.data.iter().peekable();
        let mut right = other.data.iter().peekable();
        loop {
            let (index, value) = match (left.peek().copied(), right.peek().copied()) {
                (Some(l), Some(r)) => match l.index().cmp(&r.index()) {
                    Ordering::Less => {
                        left.next();
                        (l.index(), l.value().clone())
                    },
                    Ordering::Greater => {
                        right.next();
                        (r.index(), r.value().clone())
                    },
                    Ordering::Equal => {
                        left.next();
                        right.next();
                        (l.index(), l.value().sum(r.value()))
                    },
                },
                (Some(l), None) => {
                    left.next();
                    (l.index(), l.value().clone())
                },
                (None, Some(r)) => {
                    right.next();
                    (r.index(), r.value().clone())
                },
                (None, None) => break,
            };

            if value != self.zero {
                merged.push(IndexValuePair::new(index, value));
            }
        }

        self.data = merged.into_iter().collect();
        Ok(())
    }

    /// Multiply each element of the vector by a value.
    ///
    /// Elements that become zero are no longer stored.
    pub fn scalar_prod(&mut self, f: &F) {
        self.data.map_values(|value| value.prod(f));

        let zero = &self.zero;
        self.data.retain(|pair| pair.value() != zero);
    }

    /// Calculate the inner product between two vectors.
    ///
    /// Only indices stored in both vectors contribute.
    ///
    /// # Return value
    ///
    /// The inner product, or the zero element if either vector has no stored values.
    ///
    /// # Errors
    ///
    /// If the dimensions differ.
    pub fn dot_prod(&self, other: &SparseVector<F>) -> Result<F, VectorError> {
        self.check_dimension(other)?;

        let total = self.iter()
            .merge_join_by(other.iter(), |l, r| l.index().cmp(&r.index()))
            .filter_map(|pairs| match pairs {
                EitherOrBoth::Both(l, r) => Some(l.value().prod(r.value())),
                EitherOrBoth::Left(_) | EitherOrBoth::Right(_) => None,
            })
            .fold(self.zero.clone(), |total, term| total.sum(&term));

        Ok(total)
    }

    /// Replace every element by its additive inverse.
    pub fn sym(&mut self) {
        self.data.map_values(|value| value.sym());
    }
}

impl<'a, F> IntoIterator for &'a SparseVector<F> {
    type Item = &'a IndexValuePair<F>;
    type IntoIter = Iter<'a, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Equal when the dimensions are equal, and the same pairs are stored.
///
/// Both chains are ordered by index, so comparing them pair by pair compares them as sets.
impl<F: PartialEq> PartialEq for SparseVector<F> {
    fn eq(&self, other: &Self) -> bool {
        self.dimension == other.dimension
            && self.els() == other.els()
            && self.iter().eq(other.iter())
    }
}

impl<F: Eq> Eq for SparseVector<F> {
}

impl<F: fmt::Display> fmt::Display for SparseVector<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.iter().map(IndexValuePair::value).format(", "))
    }
}

impl<F: fmt::Debug> fmt::Debug for SparseVector<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SparseVector")
            .field("dimension", &self.dimension)
            .field("entries", &self.iter().map(|pair| (pair.index(), pair.value())).collect::<Vec<_>>())
            .finish()
    }
}
