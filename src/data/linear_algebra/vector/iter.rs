//! # Iterating over stored pairs
use std::iter::FusedIterator;

use crate::data::linear_algebra::pair::IndexValuePair;
use crate::data::linear_algebra::vector::list::OrderedSparseList;

/// Forward iterator over the pairs of a sparse vector, by increasing index.
///
/// Borrows the vector, so the vector can't be changed while iterating. Create a new iterator to
/// start over.
#[derive(Clone, Debug)]
pub struct Iter<'a, F> {
    list: &'a OrderedSparseList<F>,
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, F> Iter<'a, F> {
    pub(crate) fn new(list: &'a OrderedSparseList<F>) -> Self {
        Self {
            list,
            cursor: list.head(),
            remaining: list.len(),
        }
    }
}

impl<'a, F> Iterator for Iter<'a, F> {
    type Item = &'a IndexValuePair<F>;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.cursor?;
        self.cursor = self.list.next(slot);
        self.remaining -= 1;

        Some(self.list.pair(slot))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<F> ExactSizeIterator for Iter<'_, F> {
}

impl<F> FusedIterator for Iter<'_, F> {
}
