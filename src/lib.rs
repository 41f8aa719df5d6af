//! Comparator-Ordered Binary Heaps for Rust
//!
//! This crate provides an array-backed binary heap whose rank order is
//! injected as a comparator at construction, together with the stream
//! processing patterns such a heap enables.
//!
//! # Features
//!
//! - **Heap**: binary heap with O(log n) insert/pop and O(1) peek; one heap
//!   type serves as max-heap, min-heap, or custom-order heap depending on
//!   the comparator it is built with
//! - **Two feeding modes**: unbounded [`Heap::insert`] doubles the capacity
//!   when full, capacity-bounded [`Heap::push`] replaces or drops against
//!   the root and never grows
//! - **TopK**: retains the best `k` elements of a stream in O(k) memory,
//!   with merging of per-shard selectors and a frequency-count front end
//! - **RunningMedian / Percentile**: two-heap order-statistic trackers with
//!   O(log n) insertion and O(1) reads
//!
//! # Example
//!
//! ```rust
//! use rank_heap::{Heap, MaxComparator, MinComparator};
//!
//! let mut max_heap = Heap::new(MaxComparator);
//! max_heap.insert_all([3, 1, 2]);
//! assert_eq!(max_heap.pop(), Some(3));
//!
//! let mut min_heap = Heap::new(MinComparator);
//! min_heap.insert_all([3, 1, 2]);
//! assert_eq!(min_heap.pop(), Some(1));
//! ```

pub mod compare;
pub mod heap;
pub mod stats;
pub mod topk;

// Re-export the main types for convenience
pub use compare::{Compare, FnComparator, KeyComparator, MaxComparator, MinComparator};
pub use heap::Heap;
pub use stats::{Percentile, RunningMedian};
pub use topk::TopK;
