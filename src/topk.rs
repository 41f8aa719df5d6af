//! Bounded top-k selection over streams.
//!
//! A [`TopK`] selector wraps a capacity-bounded [`Heap`] and feeds it
//! exclusively through [`Heap::push`], so it retains the `k`
//! lowest-ranked elements seen so far in O(k) memory regardless of
//! stream length. Ranking "lowest" is what makes the trick work: the
//! root of the heap is the highest-ranked survivor, i.e. the element
//! closest to being evicted, so each incoming element needs exactly one
//! comparison against the root to decide whether it belongs in the
//! result set.
//!
//! To keep the `k` *largest* values of a stream, rank them with a
//! reversed comparator such as [`MinComparator`](crate::MinComparator);
//! [`hottest_keys`] does exactly that for frequency counting.
//!
//! # Example
//!
//! ```rust
//! use rank_heap::{MaxComparator, TopK};
//!
//! let mut selector = TopK::new(3, MaxComparator);
//! selector.offer_all([6, 1, 5, 4, 3, 2]);
//! assert_eq!(selector.into_ranked(), vec![3, 2, 1]);
//! ```

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::compare::{Compare, FnComparator};
use crate::heap::Heap;

/// Retains the `k` lowest-ranked elements of a stream.
#[derive(Clone, Debug)]
pub struct TopK<E, C: Compare<E>> {
    heap: Heap<E, C>,
}

impl<E, C: Compare<E>> TopK<E, C> {
    /// Creates a selector that retains at most `k` elements.
    ///
    /// A `k` of zero is allowed and retains nothing.
    pub fn new(k: usize, cmp: C) -> Self {
        TopK {
            heap: Heap::with_capacity(k, cmp),
        }
    }

    /// The retention bound this selector was created with.
    pub fn k(&self) -> usize {
        self.heap.capacity()
    }

    /// Number of elements currently retained.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` when nothing has been retained yet.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Offers one element of the stream.
    ///
    /// Once `k` elements are retained, the offer either evicts the
    /// current [`threshold`](TopK::threshold) element or is dropped; an
    /// offer tied with the threshold is dropped.
    pub fn offer(&mut self, element: E) {
        self.heap.push(element);
    }

    /// Offers every element of an iterator.
    pub fn offer_all<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = E>,
    {
        for element in elements {
            self.offer(element);
        }
    }

    /// The highest-ranked retained element, which is the next in line
    /// for eviction. `None` until at least one element is retained.
    ///
    /// Once the selector is full, an offer survives only if it ranks
    /// strictly below this element.
    pub fn threshold(&self) -> Option<&E> {
        self.heap.peek()
    }

    /// Absorbs another selector's retained elements into this one.
    ///
    /// Partial results built over shards of a stream can be combined
    /// this way; the merged selector retains what a single selector fed
    /// the concatenated stream would retain.
    pub fn merge(&mut self, mut other: TopK<E, C>) {
        while let Some(element) = other.heap.pop() {
            self.offer(element);
        }
    }

    /// Consumes the selector and returns the retained elements from
    /// highest-ranked to lowest-ranked.
    pub fn into_ranked(mut self) -> Vec<E> {
        let mut ranked = Vec::with_capacity(self.heap.len());
        while let Some(element) = self.heap.pop() {
            ranked.push(element);
        }
        ranked
    }

    /// One-shot selection: feeds `items` through a fresh selector and
    /// returns the retained elements from highest-ranked to
    /// lowest-ranked.
    pub fn select<I>(items: I, k: usize, cmp: C) -> Vec<E>
    where
        I: IntoIterator<Item = E>,
    {
        let mut selector = TopK::new(k, cmp);
        selector.offer_all(items);
        selector.into_ranked()
    }
}

/// Counts key occurrences and returns the `k` most frequent keys with
/// their counts, most frequent first.
///
/// Keys are tallied in a hash map, then the `(key, count)` entries run
/// through a [`TopK`] ranked by *ascending* count so the selector
/// retains the largest counts. Which key survives a tie at the cutoff
/// is unspecified.
///
/// # Example
///
/// ```rust
/// use rank_heap::topk::hottest_keys;
///
/// let hits = ["a", "b", "a", "c", "a", "b"];
/// let top = hottest_keys(hits, 2);
/// assert_eq!(top[0], ("a", 3));
/// assert_eq!(top[1], ("b", 2));
/// ```
pub fn hottest_keys<K, I>(keys: I, k: usize) -> Vec<(K, u64)>
where
    K: Hash + Eq,
    I: IntoIterator<Item = K>,
{
    let mut counts: FxHashMap<K, u64> = FxHashMap::default();
    for key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }
    // Reversed rank on the count: the entry with the smallest count sits
    // at the threshold, so offers with larger counts evict it.
    let by_count_reversed =
        FnComparator(|a: &(K, u64), b: &(K, u64)| b.1.cmp(&a.1));
    let mut ranked = TopK::select(counts, k, by_count_reversed);
    ranked.reverse();
    ranked
}
