//! # Ordered sparse list
//!
//! A singly linked chain of index-value pairs, strictly increasing by index.
//!
//! Nodes live in an arena (a `Vec`) and refer to their successor by slot. Every slot in the arena
//! is part of the chain: removal moves the last slot into the vacated one and patches the link that
//! pointed at it. All operations are linear in the number of stored pairs.
use std::mem;

use crate::data::linear_algebra::pair::IndexValuePair;
use crate::data::linear_algebra::vector::iter::Iter;

#[derive(Clone, Debug)]
struct Node<F> {
    pair: IndexValuePair<F>,
    next: Option<usize>,
}

#[derive(Clone, Debug)]
pub(crate) struct OrderedSparseList<F> {
    nodes: Vec<Node<F>>,
    head: Option<usize>,
}

impl<F> OrderedSparseList<F> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
        }
    }

    /// Number of pairs in the chain.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn head(&self) -> Option<usize> {
        self.head
    }

    pub fn pair(&self, slot: usize) -> &IndexValuePair<F> {
        &self.nodes[slot].pair
    }

    pub fn next(&self, slot: usize) -> Option<usize> {
        self.nodes[slot].next
    }

    pub fn iter(&self) -> Iter<'_, F> {
        Iter::new(self)
    }

    /// Find the slot holding `index`.
    ///
    /// The scan stops as soon as a larger index is seen.
    pub fn locate(&self, index: usize) -> Option<usize> {
        let mut cursor = self.head;
        while let Some(slot) = cursor {
            let current = self.nodes[slot].pair.index();
            if current == index {
                return Some(slot);
            }
            if current > index {
                return None;
            }
            cursor = self.nodes[slot].next;
        }

        None
    }

    /// Value stored at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&F> {
        self.locate(index).map(|slot| self.nodes[slot].pair.value())
    }

    /// Insert a pair whose index is not yet present.
    ///
    /// The new node is placed directly before the first node with a larger index, or at the tail
    /// if there is none.
    pub fn insert_ordered(&mut self, pair: IndexValuePair<F>) {
        debug_assert!(self.locate(pair.index()).is_none());

        let slot = self.nodes.len();
        match self.head {
            None => {
                self.nodes.push(Node { pair, next: None });
                self.head = Some(slot);
            },
            Some(head) if self.nodes[head].pair.index() > pair.index() => {
                self.nodes.push(Node { pair, next: Some(head) });
                self.head = Some(slot);
            },
            Some(head) => {
                let mut previous = head;
                while let Some(next) = self.nodes[previous].next {
                    if self.nodes[next].pair.index() > pair.index() {
                        break;
                    }
                    previous = next;
                }

                let next = self.nodes[previous].next;
                self.nodes.push(Node { pair, next });
                self.nodes[previous].next = Some(slot);
            },
        }
    }

    /// Replace the value of the pair in `slot`, keeping its index.
    pub fn replace(&mut self, slot: usize, value: F) -> F {
        let index = self.nodes[slot].pair.index();
        let old = mem::replace(&mut self.nodes[slot].pair, IndexValuePair::new(index, value));

        old.into_inner().1
    }

    /// Unlink the pair at `index`, if present.
    pub fn remove(&mut self, index: usize) -> Option<IndexValuePair<F>> {
        let mut previous = None;
        let mut cursor = self.head;
        while let Some(slot) = cursor {
            let current = self.nodes[slot].pair.index();
            if current == index {
                break;
            }
            if current > index {
                return None;
            }
            previous = Some(slot);
            cursor = self.nodes[slot].next;
        }
        let slot = cursor?;

        let next = self.nodes[slot].next;
        self.link(previous, next);

        // The last node is about to be moved into `slot`
        let last = self.nodes.len() - 1;
        if slot != last {
            let last_previous = self.predecessor(last);
            self.link(last_previous, Some(slot));
        }

        Some(self.nodes.swap_remove(slot).pair)
    }

    /// Replace every value, keeping the indices.
    pub fn map_values(&mut self, mut f: impl FnMut(&F) -> F) {
        for node in &mut self.nodes {
            let index = node.pair.index();
            node.pair = IndexValuePair::new(index, f(node.pair.value()));
        }
    }

    /// Keep only the pairs satisfying the predicate, preserving their order.
    pub fn retain(&mut self, mut keep: impl FnMut(&IndexValuePair<F>) -> bool) {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut cursor = self.head;
        while let Some(slot) = cursor {
            if keep(&self.nodes[slot].pair) {
                order.push(slot);
            }
            cursor = self.nodes[slot].next;
        }

        if order.len() == self.nodes.len() {
            return;
        }

        let mut nodes = mem::take(&mut self.nodes).into_iter().map(Some).collect::<Vec<_>>();
        *self = order.into_iter()
            .filter_map(|slot| nodes[slot].take())
            .map(|node| node.pair)
            .collect();
    }

    /// Point the link after `previous` (or the head, when `None`) at `target`.
    fn link(&mut self, previous: Option<usize>, target: Option<usize>) {
        match previous {
            Some(slot) => self.nodes[slot].next = target,
            None => self.head = target,
        }
    }

    fn predecessor(&self, slot: usize) -> Option<usize> {
        let mut cursor = self.head;
        while let Some(current) = cursor {
            if self.nodes[current].next == Some(slot) {
                return Some(current);
            }
            cursor = self.nodes[current].next;
        }

        None
    }
}

impl<F> Default for OrderedSparseList<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Collect pairs that are already strictly increasing by index.
impl<F> FromIterator<IndexValuePair<F>> for OrderedSparseList<F> {
    fn from_iter<I: IntoIterator<Item=IndexValuePair<F>>>(iter: I) -> Self {
        let mut nodes = iter.into_iter()
            .enumerate()
            .map(|(slot, pair)| Node { pair, next: Some(slot + 1) })
            .collect::<Vec<_>>();
        debug_assert!(nodes.windows(2).all(|w| w[0].pair.index() < w[1].pair.index()));

        if let Some(last) = nodes.last_mut() {
            last.next = None;
        }
        let head = if nodes.is_empty() { None } else { Some(0) };

        Self { nodes, head }
    }
}
