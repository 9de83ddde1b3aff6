use std::cmp::Ordering;

/// Three-way ordering function for tree items.
///
/// # Purpose
/// A `Comparator` defines both the sort order of a tree and key equality:
/// two items for which `compare` returns `Ordering::Equal` are considered
/// the same key, and the tree keeps only one of them. The comparator is
/// supplied once at tree creation and must be consistent for the lifetime
/// of the tree (a comparator that answers differently for the same pair of
/// items corrupts the structure; `validate` exists to diagnose that).
///
/// # Usage
/// Most callers use [`NaturalOrder`], which delegates to `Ord`:
/// ```rust,ignore
/// let tree: RbTree<i64> = RbTree::new();
/// ```
/// Custom orderings wrap a closure with [`FnComparator`]:
/// ```rust,ignore
/// let by_len = FnComparator::new(|a: &String, b: &String| a.len().cmp(&b.len()));
/// let tree = RbTree::with_comparator(by_len);
/// ```
pub trait Comparator<T> {
    /// Compares two items, returning `Less`, `Equal`, or `Greater`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Comparator that delegates to the item type's `Ord` implementation.
///
/// This is the default comparator for [`crate::tree::RbTree`]. It is a
/// zero-sized type, so it adds no per-tree storage cost.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Comparator backed by a closure or function pointer.
///
/// Useful for reversed orderings, field projections, or locale-aware
/// comparisons where the item type's `Ord` is not the desired key order.
#[derive(Debug, Clone)]
pub struct FnComparator<F> {
    compare_fn: F,
}

impl<F> FnComparator<F> {
    /// Wraps a three-way comparison function.
    pub fn new(compare_fn: F) -> Self {
        FnComparator { compare_fn }
    }
}

impl<T, F> Comparator<T> for FnComparator<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.compare_fn)(a, b)
    }
}
