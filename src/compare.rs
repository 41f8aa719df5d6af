//! Comparators that define the rank order of a heap.
//!
//! Every heap in this crate is ordered by a caller-supplied comparator
//! rather than by a `T: Ord` bound on the element type alone. The
//! comparator is handed to the heap at construction and consulted for
//! every ordering decision, so the same element type can be ranked
//! ascending, descending, or by an extracted key without wrapper types
//! like `std::cmp::Reverse`.
//!
//! The [`Compare`] trait is implemented by four adapters:
//!
//! - [`MaxComparator`]: natural order, greatest element at the root
//! - [`MinComparator`]: reversed natural order, least element at the root
//! - [`FnComparator`]: wraps an arbitrary `Fn(&E, &E) -> Ordering`
//! - [`KeyComparator`]: ranks by a key extracted from each element
//!
//! Closures are wrapped in [`FnComparator`] instead of implementing
//! [`Compare`] directly so that hand-written comparator types and
//! closure-based ones coexist without overlapping impls.

use std::cmp::Ordering;

/// A total order over values of type `E`.
///
/// `compare(a, b)` returns [`Ordering::Greater`] when `a` outranks `b`,
/// that is, when `a` should sit closer to the root of the heap. The
/// order must be total and consistent: antisymmetric and transitive,
/// with equal elements reported as [`Ordering::Equal`] in both
/// directions. A comparator that violates these rules will not cause
/// memory unsafety, but the heap's ordering guarantees are void.
pub trait Compare<E> {
    /// Ranks `a` against `b` under this comparator's total order.
    fn compare(&self, a: &E, b: &E) -> Ordering;
}

/// Ranks elements by their natural order, so the greatest element
/// outranks all others and surfaces at the root.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct MaxComparator;

impl<E: Ord> Compare<E> for MaxComparator {
    fn compare(&self, a: &E, b: &E) -> Ordering {
        a.cmp(b)
    }
}

/// Ranks elements by the reverse of their natural order, so the least
/// element outranks all others and surfaces at the root.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct MinComparator;

impl<E: Ord> Compare<E> for MinComparator {
    fn compare(&self, a: &E, b: &E) -> Ordering {
        b.cmp(a)
    }
}

/// Ranks elements with an arbitrary comparison function.
///
/// # Example
///
/// ```rust
/// use rank_heap::{FnComparator, Heap};
///
/// // Rank by absolute value.
/// let mut heap = Heap::new(FnComparator(|a: &i32, b: &i32| {
///     a.abs().cmp(&b.abs())
/// }));
/// heap.insert_all([3, -7, 5]);
/// assert_eq!(heap.pop(), Some(-7));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct FnComparator<F>(pub F);

impl<E, F> Compare<E> for FnComparator<F>
where
    F: Fn(&E, &E) -> Ordering,
{
    fn compare(&self, a: &E, b: &E) -> Ordering {
        (self.0)(a, b)
    }
}

/// Ranks elements by a key extracted from each one, greatest key first.
///
/// # Example
///
/// ```rust
/// use rank_heap::{Heap, KeyComparator};
///
/// let mut heap = Heap::new(KeyComparator(|s: &&str| s.len()));
/// heap.insert_all(["ab", "abcd", "a"]);
/// assert_eq!(heap.pop(), Some("abcd"));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct KeyComparator<F>(pub F);

impl<E, K, F> Compare<E> for KeyComparator<F>
where
    K: Ord,
    F: Fn(&E) -> K,
{
    fn compare(&self, a: &E, b: &E) -> Ordering {
        (self.0)(a).cmp(&(self.0)(b))
    }
}
