//! Running order statistics over unsorted streams.
//!
//! Both trackers here use the two-heap technique: the stream is split
//! into a lower half kept in a max-ordered heap and an upper half kept
//! in a min-ordered heap, so the boundary elements of the two halves
//! are both O(1) reads. After every insertion a rebalancing loop moves
//! roots from one heap into the other until the halves hit the target
//! split, which keeps each insertion at O(log n) with no sorting and no
//! scanning.
//!
//! - [`RunningMedian`] splits the stream in half and reads the median
//!   off the upper heap's root.
//! - [`Percentile`] splits the stream at a configurable fraction and
//!   reads the percentile off the lower heap's root.
//!
//! # Example
//!
//! ```rust
//! use rank_heap::RunningMedian;
//!
//! let mut median = RunningMedian::new();
//! median.insert_all([6, 1, 5]);
//! assert_eq!(median.median(), Some(&5));
//! median.insert_all([4, 3, 2, 7]);
//! assert_eq!(median.median(), Some(&4));
//! ```

use crate::compare::{MaxComparator, MinComparator};
use crate::heap::Heap;

/// Tracks the median of a stream of values.
///
/// The median of `n` values is defined as the element at index `n / 2`
/// of the sorted stream (the upper of the two middle elements when `n`
/// is even), so it is always a value that actually occurred.
#[derive(Clone, Debug)]
pub struct RunningMedian<T: Ord> {
    // Lower half; its root is the greatest value below the median.
    lower: Heap<T, MaxComparator>,
    // Upper half; its root is the median.
    upper: Heap<T, MinComparator>,
}

impl<T: Ord> RunningMedian<T> {
    /// Creates a tracker with no values.
    pub fn new() -> Self {
        RunningMedian {
            lower: Heap::new(MaxComparator),
            upper: Heap::new(MinComparator),
        }
    }

    /// Number of values inserted so far.
    pub fn len(&self) -> usize {
        self.lower.len() + self.upper.len()
    }

    /// Returns `true` when no values have been inserted.
    pub fn is_empty(&self) -> bool {
        self.lower.is_empty() && self.upper.is_empty()
    }

    /// Inserts one value and restores the half-and-half split.
    ///
    /// # Time Complexity
    ///
    /// O(log n).
    pub fn insert(&mut self, value: T) {
        match self.upper.peek() {
            Some(boundary) if value < *boundary => self.lower.insert(value),
            _ => self.upper.insert(value),
        }
        self.rebalance();
    }

    /// Inserts every value of an iterator.
    pub fn insert_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            self.insert(value);
        }
    }

    /// The current median, or `None` before any value is inserted.
    pub fn median(&self) -> Option<&T> {
        self.upper.peek()
    }

    fn rebalance(&mut self) {
        // The upper heap keeps the larger half: ceil(n / 2) values.
        let target = (self.len() + 1) / 2;
        while self.upper.len() > target {
            match self.upper.pop() {
                Some(value) => self.lower.insert(value),
                None => break,
            }
        }
        while self.upper.len() < target {
            match self.lower.pop() {
                Some(value) => self.upper.insert(value),
                None => break,
            }
        }
    }
}

impl<T: Ord> Default for RunningMedian<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Tracks a configurable percentile of a stream of values.
///
/// For a fraction `q` and `n` inserted values, the tracked value is the
/// element at index `floor(n * q) - 1` of the sorted stream, i.e. the
/// value below which a `q` share of the stream lies. A `q` of `0.99`
/// tracks the 99th percentile, the usual tail-latency cutoff.
#[derive(Clone, Debug)]
pub struct Percentile<T: Ord> {
    // Holds the q share of the stream; its root is the tracked value.
    lower: Heap<T, MaxComparator>,
    // Holds the remaining tail above the percentile.
    upper: Heap<T, MinComparator>,
    fraction: f64,
}

impl<T: Ord> Percentile<T> {
    /// Creates a tracker for the given percentile fraction.
    ///
    /// # Panics
    ///
    /// Panics unless `fraction` is within `0.0..=1.0`.
    pub fn new(fraction: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&fraction),
            "percentile fraction must be within 0.0..=1.0, got {fraction}"
        );
        Percentile {
            lower: Heap::new(MaxComparator),
            upper: Heap::new(MinComparator),
            fraction,
        }
    }

    /// The fraction this tracker was created with.
    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Number of values inserted so far.
    pub fn len(&self) -> usize {
        self.lower.len() + self.upper.len()
    }

    /// Returns `true` when no values have been inserted.
    pub fn is_empty(&self) -> bool {
        self.lower.is_empty() && self.upper.is_empty()
    }

    /// Inserts one value and restores the split at the fraction.
    ///
    /// # Time Complexity
    ///
    /// O(log n).
    pub fn insert(&mut self, value: T) {
        // An empty lower share routes everything into the tail; the
        // rebalance pulls the minimum across once the target is nonzero.
        match self.lower.peek() {
            Some(boundary) if value <= *boundary => self.lower.insert(value),
            _ => self.upper.insert(value),
        }
        self.rebalance();
    }

    /// Inserts every value of an iterator.
    pub fn insert_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            self.insert(value);
        }
    }

    /// The current percentile value.
    ///
    /// `None` while `floor(len * fraction)` is zero, i.e. until enough
    /// values have arrived for the percentile to point at one of them.
    pub fn value(&self) -> Option<&T> {
        self.lower.peek()
    }

    fn rebalance(&mut self) {
        // Truncating product, so small streams may round the lower
        // share down to zero.
        let target = (self.len() as f64 * self.fraction) as usize;
        while self.lower.len() > target {
            match self.lower.pop() {
                Some(value) => self.upper.insert(value),
                None => break,
            }
        }
        while self.lower.len() < target {
            match self.upper.pop() {
                Some(value) => self.lower.insert(value),
                None => break,
            }
        }
    }
}
