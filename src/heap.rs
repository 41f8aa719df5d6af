//! Array-backed binary heap ordered by an injected comparator.
//!
//! # Design
//!
//! The heap is a complete binary tree stored in a `Vec`, with the
//! children of the node at index `i` at `2i + 1` and `2i + 2`. The
//! element ranked greatest by the comparator sits at index 0. Alongside
//! the backing vector the heap tracks a *logical capacity*, which
//! controls two distinct feeding modes:
//!
//! - [`Heap::insert`] ignores the capacity as a bound: when the heap is
//!   full it doubles the capacity and the element is always admitted.
//! - [`Heap::push`] treats the capacity as a hard bound: when the heap
//!   is full, the incoming element either replaces the root or is
//!   silently dropped. Feeding a stream through `push` on a heap of
//!   capacity `k` therefore retains the `k` lowest-ranked elements
//!   seen, which is the standard top-k selection trick.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | [`Heap::insert`] | O(log n) amortized |
//! | [`Heap::push`] | O(log n) |
//! | [`Heap::pop`] | O(log n) |
//! | [`Heap::peek`] | O(1) |
//!
//! # Example
//!
//! ```rust
//! use rank_heap::{Heap, MaxComparator};
//!
//! let mut heap = Heap::new(MaxComparator);
//! heap.insert_all([3, 1, 4, 1, 5]);
//! assert_eq!(heap.peek(), Some(&5));
//! assert_eq!(heap.pop(), Some(5));
//! assert_eq!(heap.len(), 4);
//! ```

use std::fmt;

use crate::compare::Compare;

/// Logical capacity used by [`Heap::new`].
const DEFAULT_CAPACITY: usize = 16;

/// A binary heap over elements of type `E`, ordered by a comparator of
/// type `C`.
///
/// The comparator is mandatory: it is stored in the heap at
/// construction and consulted for every ordering decision. See the
/// [module documentation](self) for the `insert`/`push` feeding modes.
#[derive(Clone)]
pub struct Heap<E, C: Compare<E>> {
    data: Vec<E>,
    // Logical capacity; the Vec may reserve more than this.
    capacity: usize,
    cmp: C,
}

impl<E, C: Compare<E>> Heap<E, C> {
    /// Creates an empty heap with a default logical capacity of 16.
    pub fn new(cmp: C) -> Self {
        Self::with_capacity(DEFAULT_CAPACITY, cmp)
    }

    /// Creates an empty heap with the given logical capacity.
    ///
    /// A capacity of zero is allowed: [`Heap::insert`] will grow past
    /// it, while [`Heap::push`] will drop every element offered.
    pub fn with_capacity(capacity: usize, cmp: C) -> Self {
        Heap {
            data: Vec::with_capacity(capacity),
            capacity,
            cmp,
        }
    }

    /// Creates a heap with the given logical capacity and inserts every
    /// element of `elements` in order, growing as needed.
    pub fn from_elements<I>(capacity: usize, elements: I, cmp: C) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        let mut heap = Self::with_capacity(capacity, cmp);
        heap.insert_all(elements);
        heap
    }

    /// Number of elements currently in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current logical capacity.
    ///
    /// Starts at the constructed value and doubles each time
    /// [`Heap::insert`] fills the heap; [`Heap::push`] never changes it.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The backing storage in heap order.
    ///
    /// Index 0 is the root; the children of index `i` are at `2i + 1`
    /// and `2i + 2`. No order is guaranteed beyond the parent-child
    /// relation.
    pub fn as_slice(&self) -> &[E] {
        &self.data
    }

    /// Inserts an element, growing the heap if it is full.
    ///
    /// When the heap is at capacity the logical capacity doubles before
    /// the element is placed, so `insert` never drops anything.
    ///
    /// # Time Complexity
    ///
    /// O(log n), amortized over the occasional reallocation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rank_heap::{Heap, MaxComparator};
    ///
    /// let mut heap = Heap::with_capacity(2, MaxComparator);
    /// heap.insert_all([1, 2, 3]);
    /// assert_eq!(heap.len(), 3);
    /// assert_eq!(heap.capacity(), 4);
    /// ```
    pub fn insert(&mut self, element: E) {
        if self.data.len() == self.capacity {
            self.grow();
        }
        self.data.push(element);
        self.sift_up(self.data.len() - 1);
    }

    /// Inserts every element of an iterator via [`Heap::insert`].
    pub fn insert_all<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = E>,
    {
        for element in elements {
            self.insert(element);
        }
    }

    /// Offers an element to a capacity-bounded heap.
    ///
    /// While the heap is below its logical capacity this behaves like
    /// [`Heap::insert`]. Once full, the element replaces the root only
    /// if the comparator ranks it strictly below the root; otherwise it
    /// is silently dropped. An element tied with the root is dropped,
    /// which keeps earlier arrivals in place. The capacity never
    /// changes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rank_heap::{Heap, MaxComparator};
    ///
    /// let mut heap = Heap::with_capacity(3, MaxComparator);
    /// for n in [6, 1, 5, 4, 3, 2] {
    ///     heap.push(n);
    /// }
    /// // The three smallest survive.
    /// assert_eq!(heap.pop(), Some(3));
    /// assert_eq!(heap.pop(), Some(2));
    /// assert_eq!(heap.pop(), Some(1));
    /// ```
    pub fn push(&mut self, element: E) {
        if self.data.len() < self.capacity {
            self.insert(element);
            return;
        }
        let replaces_root = match self.data.first() {
            Some(root) => self.cmp.compare(&element, root).is_lt(),
            None => false,
        };
        if replaces_root {
            self.data[0] = element;
            self.sift_down(0);
        }
    }

    /// Borrows the highest-ranked element without removing it.
    ///
    /// Returns `None` when the heap is empty. Repeated calls return the
    /// same element.
    pub fn peek(&self) -> Option<&E> {
        self.data.first()
    }

    /// Removes and returns the highest-ranked element.
    ///
    /// Returns `None` when the heap is empty. The last element is
    /// swapped into the root and sifted down to restore heap order.
    pub fn pop(&mut self) -> Option<E> {
        if self.data.is_empty() {
            return None;
        }
        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let result = self.data.pop();
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        result
    }

    fn grow(&mut self) {
        // Doubling; a zero capacity bootstraps to one.
        self.capacity = (self.capacity * 2).max(1);
        self.data.reserve(self.capacity - self.data.len());
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.cmp.compare(&self.data[pos], &self.data[parent]).is_gt() {
                self.data.swap(pos, parent);
                pos = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let end = self.data.len();
        loop {
            let right = 2 * pos + 2;
            let left = 2 * pos + 1;
            let mut best = pos;
            // The right child is examined first and the left child must
            // strictly outrank the running best to displace it, so a tie
            // between children promotes the right one.
            if right < end && self.cmp.compare(&self.data[best], &self.data[right]).is_lt() {
                best = right;
            }
            if left < end && self.cmp.compare(&self.data[best], &self.data[left]).is_lt() {
                best = left;
            }
            if best == pos {
                break;
            }
            self.data.swap(pos, best);
            pos = best;
        }
    }
}

impl<E, C: Compare<E>> Extend<E> for Heap<E, C> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<E: fmt::Debug, C: Compare<E>> fmt::Debug for Heap<E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap")
            .field("len", &self.data.len())
            .field("capacity", &self.capacity)
            .field("data", &self.data)
            .finish()
    }
}
