//! Property-based tests using proptest
//!
//! These tests generate random values and operation sequences and verify
//! that the heap order, the size accounting, and the derived stream
//! processors always agree with a straightforward sorted reference.

use proptest::prelude::*;
use rank_heap::{Heap, MaxComparator, MinComparator, Percentile, RunningMedian, TopK};

/// Every parent must rank at or above both of its children.
fn check_heap_order(slice: &[i32]) -> Result<(), TestCaseError> {
    for i in 1..slice.len() {
        let parent = slice[(i - 1) / 2];
        prop_assert!(
            parent >= slice[i],
            "parent {} at {} ranks below child {} at {}",
            parent,
            (i - 1) / 2,
            slice[i],
            i
        );
    }
    Ok(())
}

fn drain_max(mut heap: Heap<i32, MaxComparator>) -> Vec<i32> {
    let mut out = Vec::with_capacity(heap.len());
    while let Some(v) = heap.pop() {
        out.push(v);
    }
    out
}

/// Mixed insert/push/pop sequence checked against a model of the
/// observable state: length, logical capacity, and heap order.
fn check_mixed_ops(initial_capacity: usize, ops: Vec<(u8, i32)>) -> Result<(), TestCaseError> {
    let mut heap = Heap::with_capacity(initial_capacity, MaxComparator);
    let mut expected_len = 0usize;
    let mut expected_capacity = initial_capacity;

    for (op, value) in ops {
        match op % 3 {
            0 => {
                if expected_len == expected_capacity {
                    expected_capacity = (expected_capacity * 2).max(1);
                }
                heap.insert(value);
                expected_len += 1;
            }
            1 => {
                if expected_len < expected_capacity {
                    expected_len += 1;
                }
                heap.push(value);
            }
            _ => {
                if heap.pop().is_some() {
                    expected_len -= 1;
                }
            }
        }
        prop_assert_eq!(heap.len(), expected_len);
        prop_assert_eq!(heap.capacity(), expected_capacity);
        check_heap_order(heap.as_slice())?;
    }

    Ok(())
}

/// Draining after unbounded insertion must reproduce a descending sort.
fn check_drain_descending(values: Vec<i32>) -> Result<(), TestCaseError> {
    let mut heap = Heap::new(MaxComparator);
    heap.insert_all(values.iter().copied());

    let mut expected = values;
    expected.sort_unstable_by(|a, b| b.cmp(a));
    prop_assert_eq!(drain_max(heap), expected);
    Ok(())
}

/// The drained sequence must not depend on the constructed capacity.
fn check_capacity_independence(values: Vec<i32>, capacity: usize) -> Result<(), TestCaseError> {
    let mut heap = Heap::with_capacity(capacity, MaxComparator);
    heap.insert_all(values.iter().copied());

    let mut reference = Heap::with_capacity(1024, MaxComparator);
    reference.insert_all(values.iter().copied());

    prop_assert_eq!(drain_max(heap), drain_max(reference));
    Ok(())
}

/// A bounded selector must retain exactly the k lowest-ranked values.
fn check_topk_retention(values: Vec<i32>, k: usize) -> Result<(), TestCaseError> {
    let kept = TopK::select(values.iter().copied(), k, MaxComparator);

    let mut expected = values;
    expected.sort_unstable();
    expected.truncate(k);
    expected.reverse();

    prop_assert_eq!(kept, expected);
    Ok(())
}

/// Merging per-shard selectors must equal one selector over the
/// concatenated stream.
fn check_topk_merge(left: Vec<i32>, right: Vec<i32>, k: usize) -> Result<(), TestCaseError> {
    let mut merged = TopK::new(k, MaxComparator);
    merged.offer_all(left.iter().copied());
    let mut shard = TopK::new(k, MaxComparator);
    shard.offer_all(right.iter().copied());
    merged.merge(shard);

    let whole = TopK::select(left.into_iter().chain(right), k, MaxComparator);
    prop_assert_eq!(merged.into_ranked(), whole);
    Ok(())
}

/// The running median must match the sorted reference after every
/// insertion.
fn check_running_median(values: Vec<i32>) -> Result<(), TestCaseError> {
    let mut median = RunningMedian::new();
    let mut seen = Vec::new();

    for v in values {
        median.insert(v);
        seen.push(v);
        let mut sorted = seen.clone();
        sorted.sort_unstable();
        prop_assert_eq!(median.median(), Some(&sorted[sorted.len() / 2]));
        prop_assert_eq!(median.len(), seen.len());
    }
    Ok(())
}

/// The percentile tracker must match the sorted reference after every
/// insertion, including the leading stretch where it reports nothing.
fn check_percentile(values: Vec<i32>, percent: u32) -> Result<(), TestCaseError> {
    let fraction = percent as f64 / 100.0;
    let mut tracker = Percentile::new(fraction);
    let mut seen = Vec::new();

    for v in values {
        tracker.insert(v);
        seen.push(v);
        let mut sorted = seen.clone();
        sorted.sort_unstable();
        let target = (sorted.len() as f64 * fraction) as usize;
        let expected = if target == 0 {
            None
        } else {
            Some(&sorted[target - 1])
        };
        prop_assert_eq!(tracker.value(), expected);
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_mixed_ops_hold_invariants(
        capacity in 0usize..8,
        ops in prop::collection::vec((0u8..3, -100i32..100), 0..100)
    ) {
        check_mixed_ops(capacity, ops)?;
    }

    #[test]
    fn prop_drain_is_descending_sort(values in prop::collection::vec(-1000i32..1000, 0..200)) {
        check_drain_descending(values)?;
    }

    #[test]
    fn prop_min_order_drain_is_ascending(values in prop::collection::vec(-1000i32..1000, 0..100)) {
        let mut heap = Heap::new(MinComparator);
        heap.insert_all(values.iter().copied());
        let mut drained = Vec::new();
        while let Some(v) = heap.pop() {
            drained.push(v);
        }
        let mut expected = values;
        expected.sort_unstable();
        prop_assert_eq!(drained, expected);
    }

    #[test]
    fn prop_drain_independent_of_capacity(
        values in prop::collection::vec(-100i32..100, 0..100),
        capacity in 0usize..64
    ) {
        check_capacity_independence(values, capacity)?;
    }

    #[test]
    fn prop_topk_retains_k_lowest(
        values in prop::collection::vec(-1000i32..1000, 0..150),
        k in 0usize..12
    ) {
        check_topk_retention(values, k)?;
    }

    #[test]
    fn prop_topk_merge_equals_concatenation(
        left in prop::collection::vec(-1000i32..1000, 0..80),
        right in prop::collection::vec(-1000i32..1000, 0..80),
        k in 0usize..10
    ) {
        check_topk_merge(left, right, k)?;
    }

    #[test]
    fn prop_peek_is_maximum(values in prop::collection::vec(-1000i32..1000, 1..100)) {
        let mut heap = Heap::new(MaxComparator);
        heap.insert_all(values.iter().copied());
        prop_assert_eq!(heap.peek(), values.iter().max());
    }

    #[test]
    fn prop_running_median_matches_reference(
        values in prop::collection::vec(-1000i32..1000, 1..150)
    ) {
        check_running_median(values)?;
    }

    #[test]
    fn prop_percentile_matches_reference(
        values in prop::collection::vec(-1000i32..1000, 1..150),
        percent in 0u32..=100
    ) {
        check_percentile(values, percent)?;
    }
}
