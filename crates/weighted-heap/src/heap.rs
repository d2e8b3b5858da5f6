//! Binary heap over a `Vec<Node<W, P>>`.
//!
//! Positions in this module are 1-indexed to match the tree arithmetic:
//! the parent of `i` is `i / 2`, its children are `2i` and `2i + 1`.
//! Position `i` lives at `nodes[i - 1]`.

use std::iter::FusedIterator;

use crate::error::HeapError;
use crate::mode::HeapMode;
use crate::node::Node;
use crate::options::HeapOptions;

#[inline]
fn parent(pos: usize) -> usize {
    pos / 2
}

#[inline]
fn left(pos: usize) -> usize {
    2 * pos
}

#[inline]
fn right(pos: usize) -> usize {
    2 * pos + 1
}

/// Priority queue of `(weight, payload)` pairs.
///
/// Weights only need `PartialOrd`; the caller guarantees they form a strict
/// weak order (no NaN-like values). Payloads are opaque and only compared by
/// [`remove_by_payload`](Heap::remove_by_payload) and
/// [`contains_payload`](Heap::contains_payload).
///
/// Ties: percolate-up stops at an equal parent, and percolate-down prefers
/// the left child when both children carry equal weights. Given the same
/// insertion order the extraction order of equal weights is therefore always
/// the same.
#[derive(Debug, Clone)]
pub struct Heap<W, P> {
    mode: HeapMode,
    nodes: Vec<Node<W, P>>,
}

impl<W, P> Heap<W, P> {
    pub fn new(mode: HeapMode) -> Self {
        Self::with_capacity(mode, 0)
    }

    /// Preallocates like `Vec::with_capacity` and panics the same way on an
    /// impossible capacity. Use [`try_with_capacity`](Heap::try_with_capacity)
    /// for untrusted sizes.
    pub fn with_capacity(mode: HeapMode, capacity: usize) -> Self {
        Self {
            mode,
            nodes: Vec::with_capacity(capacity),
        }
    }

    pub fn min() -> Self {
        Self::new(HeapMode::Min)
    }

    pub fn max() -> Self {
        Self::new(HeapMode::Max)
    }

    /// Builds an empty heap from a textual mode (`"min"` or `"max"`).
    ///
    /// ```
    /// use weighted_heap::{Heap, HeapError, HeapMode};
    ///
    /// let heap = Heap::<u32, ()>::try_new("max").unwrap();
    /// assert_eq!(heap.mode(), HeapMode::Max);
    ///
    /// let err = Heap::<u32, ()>::try_new("middle").unwrap_err();
    /// assert_eq!(err, HeapError::InvalidMode("middle".into()));
    /// ```
    pub fn try_new(mode: &str) -> Result<Self, HeapError> {
        Ok(Self::new(mode.parse()?))
    }

    /// Like [`with_capacity`](Heap::with_capacity), but reports an
    /// unsatisfiable capacity instead of panicking.
    pub fn try_with_capacity(mode: HeapMode, capacity: usize) -> Result<Self, HeapError> {
        let mut nodes = Vec::new();
        nodes
            .try_reserve(capacity)
            .map_err(|_| HeapError::Capacity(capacity))?;
        Ok(Self { mode, nodes })
    }

    /// Builds an empty heap from loaded configuration.
    ///
    /// Fails with [`HeapError::Capacity`] when `options.capacity` cannot be
    /// allocated.
    pub fn from_options(options: &HeapOptions) -> Result<Self, HeapError> {
        Self::try_with_capacity(options.mode, options.capacity)
    }

    #[inline]
    pub fn mode(&self) -> HeapMode {
        self.mode
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Returns the node at 1-indexed `index`, or `None` when out of bounds.
    pub fn peek(&self, index: usize) -> Option<(&W, &P)> {
        let slot = index.checked_sub(1)?;
        self.nodes.get(slot).map(Node::as_pair)
    }

    #[inline]
    pub fn peek_top(&self) -> Option<(&W, &P)> {
        self.peek(1)
    }

    /// Nodes in storage order (root first, then level by level).
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&W, &P)> + '_ {
        self.nodes.iter().map(Node::as_pair)
    }

    pub fn contains_payload(&self, payload: &P) -> bool
    where
        P: PartialEq,
    {
        self.nodes.iter().any(|n| n.payload == *payload)
    }
}

impl<W: PartialOrd, P> Heap<W, P> {
    pub fn insert(&mut self, weight: W, payload: P) {
        self.nodes.push(Node::new(weight, payload));
        let last = self.nodes.len();
        self.sift_up(last);
    }

    /// Removes and returns the root, or `None` if the heap is empty.
    pub fn extract_top(&mut self) -> Option<(W, P)> {
        if self.nodes.is_empty() {
            return None;
        }
        // The last node takes the root's slot.
        let top = self.nodes.swap_remove(0);
        if !self.nodes.is_empty() {
            self.sift_down(1);
        }
        Some(top.into_pair())
    }

    /// Checks the heap property at every occupied position.
    pub fn is_valid(&self) -> bool {
        let len = self.nodes.len();
        for pos in 1..=len / 2 {
            for child in [left(pos), right(pos)] {
                if child <= len && self.better_at(child, pos) {
                    return false;
                }
            }
        }
        true
    }

    /// Drains `self` and then `other` in extraction order into a new heap
    /// with `self`'s mode.
    ///
    /// ```
    /// use weighted_heap::Heap;
    ///
    /// let mut a = Heap::min();
    /// a.insert(3, "a");
    /// a.insert(1, "b");
    /// let mut b = Heap::min();
    /// b.insert(2, "c");
    ///
    /// let merged = a.merge(b);
    /// assert_eq!(merged.into_sorted_vec(), vec![(1, "b"), (2, "c"), (3, "a")]);
    /// ```
    pub fn merge(mut self, mut other: Heap<W, P>) -> Heap<W, P> {
        let mut merged = Heap::with_capacity(self.mode, self.size() + other.size());
        merged.extend(self.drain_sorted());
        merged.extend(other.drain_sorted());
        merged
    }

    /// Rebuilds the heap under `mode` by extracting every node and inserting
    /// it into a fresh heap.
    pub fn into_mode(mut self, mode: HeapMode) -> Heap<W, P> {
        if mode == self.mode {
            return self;
        }
        let mut rebuilt = Heap::with_capacity(mode, self.size());
        rebuilt.extend(self.drain_sorted());
        rebuilt
    }

    /// Removes the first node in storage order whose payload equals `payload`.
    ///
    /// The last node is moved into the freed slot and then re-risen, or
    /// re-sunk if it could not rise.
    pub fn remove_by_payload(&mut self, payload: &P) -> Option<(W, P)>
    where
        P: PartialEq,
    {
        let slot = self.nodes.iter().position(|n| n.payload == *payload)?;
        let removed = self.nodes.swap_remove(slot);
        let pos = slot + 1;
        if pos <= self.nodes.len() && self.sift_up(pos) == pos {
            self.sift_down(pos);
        }
        Some(removed.into_pair())
    }

    /// Iterator that extracts the top on every step.
    ///
    /// Nodes not consumed stay in the heap.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, W, P> {
        DrainSorted { heap: self }
    }

    pub fn into_sorted_vec(mut self) -> Vec<(W, P)> {
        self.drain_sorted().collect()
    }

    #[inline]
    fn better_at(&self, a: usize, b: usize) -> bool {
        self.mode
            .better(&self.nodes[a - 1].weight, &self.nodes[b - 1].weight)
    }

    /// Percolate-up. Returns the final position of the node.
    fn sift_up(&mut self, mut pos: usize) -> usize {
        while pos > 1 {
            let p = parent(pos);
            if !self.better_at(pos, p) {
                break;
            }
            self.nodes.swap(pos - 1, p - 1);
            pos = p;
        }
        pos
    }

    /// Percolate-down. Returns the final position of the node.
    fn sift_down(&mut self, mut pos: usize) -> usize {
        let len = self.nodes.len();
        loop {
            let l = left(pos);
            if l > len {
                break;
            }
            let r = right(pos);
            let child = if r <= len && self.better_at(r, l) { r } else { l };
            if !self.better_at(child, pos) {
                break;
            }
            self.nodes.swap(pos - 1, child - 1);
            pos = child;
        }
        pos
    }
}

impl<W, P> Default for Heap<W, P> {
    fn default() -> Self {
        Self::new(HeapMode::default())
    }
}

impl<W: PartialOrd, P> Extend<(W, P)> for Heap<W, P> {
    fn extend<I: IntoIterator<Item = (W, P)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.nodes.reserve(iter.size_hint().0);
        for (weight, payload) in iter {
            self.insert(weight, payload);
        }
    }
}

impl<W: PartialOrd, P> FromIterator<(W, P)> for Heap<W, P> {
    /// Collects into a min-heap.
    fn from_iter<I: IntoIterator<Item = (W, P)>>(iter: I) -> Self {
        let mut heap = Heap::default();
        heap.extend(iter);
        heap
    }
}

/// Extracting iterator returned by [`Heap::drain_sorted`].
#[derive(Debug)]
pub struct DrainSorted<'a, W, P> {
    heap: &'a mut Heap<W, P>,
}

impl<W: PartialOrd, P> Iterator for DrainSorted<'_, W, P> {
    type Item = (W, P);

    fn next(&mut self) -> Option<Self::Item> {
        self.heap.extract_top()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.size();
        (len, Some(len))
    }
}

impl<W: PartialOrd, P> ExactSizeIterator for DrainSorted<'_, W, P> {}

impl<W: PartialOrd, P> FusedIterator for DrainSorted<'_, W, P> {}
