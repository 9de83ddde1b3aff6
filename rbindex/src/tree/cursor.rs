use std::cmp::Ordering;
use std::ptr;

use smallvec::SmallVec;

use crate::common::{Comparator, NaturalOrder, TraversalOrder};
use crate::tree::node::{Node, LEFT, RIGHT};
use crate::tree::tree::RbTree;

/// Inline capacity of the ancestor stack. A red-black tree of n nodes has
/// height at most 2*log2(n + 1), so 32 inline slots cover every tree up to
/// tens of thousands of items without touching the heap; larger trees
/// spill onto it transparently.
const INLINE_DEPTH: usize = 32;

/// Stateful in-order cursor over an [`RbTree`].
///
/// # Purpose
/// A `TreeCursor` produces the tree's items in comparator order, ascending
/// via [`next`](TreeCursor::next) or descending via
/// [`prev`](TreeCursor::prev), and can be repositioned to an arbitrary key
/// with [`seek`](TreeCursor::seek) so that a scan of k items from that
/// point costs O(log n + k) rather than O(n). Because nodes carry no
/// parent pointers, the cursor reconstructs ancestry with an explicit
/// stack pushed during descent.
///
/// # Characteristics
/// - **Read-only**: holds an immutable borrow of the tree; the borrow
///   checker rules out mutation while any cursor is alive
/// - **One direction per pass**: the first stepping call of a pass fixes
///   the direction; calling the opposite method starts a fresh pass from
///   that direction's starting end
/// - **Finite**: a pass ends with `None` once the stack is exhausted and
///   is not restartable except by starting a new pass
///
/// # Usage
/// ```rust,ignore
/// let mut cursor = tree.cursor();
/// if cursor.seek(&low_bound).is_some() {
///     while let Some(item) = cursor.next() {
///         if item > &high_bound {
///             break;
///         }
///         // ...
///     }
/// }
/// ```
pub struct TreeCursor<'a, T, C = NaturalOrder> {
    tree: &'a RbTree<T, C>,
    /// Root of the next unvisited subtree, null if none is pending.
    curr: *mut Node<T>,
    /// Ancestors whose own item is still unvisited, deepest on top.
    up: SmallVec<[*mut Node<T>; INLINE_DEPTH]>,
    order: Option<TraversalOrder>,
}

impl<'a, T, C: Comparator<T>> TreeCursor<'a, T, C> {
    pub(crate) fn new(tree: &'a RbTree<T, C>) -> Self {
        TreeCursor {
            tree,
            curr: ptr::null_mut(),
            up: SmallVec::new(),
            order: None,
        }
    }

    /// Returns the next item in ascending order.
    ///
    /// The first call of an ascending pass descends to the minimum node,
    /// pushing ancestors on the way; subsequent calls step to the in-order
    /// successor. Returns `None` once the pass is exhausted.
    pub fn next(&mut self) -> Option<&'a T> {
        if self.order != Some(TraversalOrder::Ascending) {
            self.start(TraversalOrder::Ascending);
        }
        self.step(RIGHT)
    }

    /// Returns the next item in descending order.
    ///
    /// Symmetric to [`next`](TreeCursor::next): the first call of a
    /// descending pass descends to the maximum node, and subsequent calls
    /// step to the in-order predecessor.
    pub fn prev(&mut self) -> Option<&'a T> {
        if self.order != Some(TraversalOrder::Descending) {
            self.start(TraversalOrder::Descending);
        }
        self.step(LEFT)
    }

    /// Positions the cursor at `key` and returns the item found there.
    ///
    /// Descends with the comparator toward the key. On a miss the cursor
    /// settles on the smallest item greater than or equal to `key`
    /// (nearest-greater-or-equal semantics); `None` means every item in
    /// the tree is smaller than `key`.
    ///
    /// The cursor is positioned just before the returned item, so an
    /// ascending pass continued with `next()` yields that item first and
    /// then its successors in sorted order.
    pub fn seek(&mut self, key: &T) -> Option<&'a T> {
        self.order = Some(TraversalOrder::Ascending);
        self.up.clear();
        self.curr = ptr::null_mut();

        unsafe {
            let mut it = self.tree.root;
            while !it.is_null() {
                if self.tree.comparator.compare(&(*it).data, key) == Ordering::Less {
                    it = (*it).link[RIGHT];
                } else {
                    // at or above the key: candidate ceiling, keep looking
                    // for a smaller one on the left
                    self.up.push(it);
                    it = (*it).link[LEFT];
                }
            }

            self.up.last().map(|&node| &(*node).data)
        }
    }

    /// Begins a fresh pass in the given order.
    fn start(&mut self, order: TraversalOrder) {
        self.up.clear();
        self.curr = self.tree.root;
        self.order = Some(order);
    }

    /// Advances one step; `dir` is the link followed after visiting a
    /// node, so `RIGHT` walks ascending and `LEFT` descending.
    ///
    /// Invariant between calls: `curr` roots the next unvisited subtree
    /// and `up` holds the ancestors whose items are still pending, so the
    /// deepest stack entry is always the next item due.
    fn step(&mut self, dir: usize) -> Option<&'a T> {
        unsafe {
            while !self.curr.is_null() {
                self.up.push(self.curr);
                self.curr = (*self.curr).link[1 - dir];
            }

            let node = self.up.pop()?;
            self.curr = (*node).link[dir];
            Some(&(*node).data)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_with(keys: &[i64]) -> RbTree<i64> {
        let mut tree = RbTree::new();
        for &key in keys {
            tree.insert(key).unwrap();
        }
        tree
    }

    #[test]
    fn test_forward_traversal_sorted() {
        let tree = tree_with(&[10, 20, 5, 15, 25, 1]);
        let mut cursor = tree.cursor();
        let mut out = Vec::new();
        while let Some(&item) = cursor.next() {
            out.push(item);
        }
        assert_eq!(out, vec![1, 5, 10, 15, 20, 25]);
        // the pass is finite and stays exhausted
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn test_backward_traversal_sorted() {
        let tree = tree_with(&[10, 20, 5, 15, 25, 1]);
        let mut cursor = tree.cursor();
        let mut out = Vec::new();
        while let Some(&item) = cursor.prev() {
            out.push(item);
        }
        assert_eq!(out, vec![25, 20, 15, 10, 5, 1]);
        assert_eq!(cursor.prev(), None);
    }

    #[test]
    fn test_empty_tree_cursor() {
        let tree: RbTree<i64> = RbTree::new();
        let mut cursor = tree.cursor();
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.prev(), None);
        assert_eq!(cursor.seek(&1), None);
    }

    #[test]
    fn test_seek_miss_positions_at_ceiling() {
        let tree = tree_with(&[10, 20, 5, 15, 25, 1]);
        let mut cursor = tree.cursor();
        assert_eq!(cursor.seek(&12), Some(&15));
        assert_eq!(cursor.next(), Some(&15));
        assert_eq!(cursor.next(), Some(&20));
    }

    #[test]
    fn test_seek_exact_hit() {
        let tree = tree_with(&[10, 20, 5, 15, 25, 1]);
        let mut cursor = tree.cursor();
        assert_eq!(cursor.seek(&15), Some(&15));
        assert_eq!(cursor.next(), Some(&15));
        assert_eq!(cursor.next(), Some(&20));
        assert_eq!(cursor.next(), Some(&25));
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn test_seek_below_minimum() {
        let tree = tree_with(&[10, 20, 5]);
        let mut cursor = tree.cursor();
        assert_eq!(cursor.seek(&-3), Some(&5));
        assert_eq!(cursor.next(), Some(&5));
    }

    #[test]
    fn test_seek_beyond_maximum() {
        let tree = tree_with(&[10, 20, 5]);
        let mut cursor = tree.cursor();
        assert_eq!(cursor.seek(&99), None);
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn test_direction_switch_starts_fresh_pass() {
        let tree = tree_with(&[1, 2, 3]);
        let mut cursor = tree.cursor();
        assert_eq!(cursor.next(), Some(&1));
        // switching direction abandons the ascending pass and starts a
        // descending one from the maximum
        assert_eq!(cursor.prev(), Some(&3));
        assert_eq!(cursor.prev(), Some(&2));
        assert_eq!(cursor.next(), Some(&1));
    }

    #[test]
    fn test_multiple_cursors_share_tree() {
        let tree = tree_with(&[1, 2, 3]);
        let mut a = tree.cursor();
        let mut b = tree.cursor();
        assert_eq!(a.next(), Some(&1));
        assert_eq!(b.prev(), Some(&3));
        assert_eq!(a.next(), Some(&2));
        assert_eq!(b.prev(), Some(&2));
    }

    #[test]
    fn test_deep_tree_exceeds_inline_stack() {
        // enough nodes that the ancestor stack must spill past its inline
        // capacity on some path
        let keys: Vec<i64> = (0..100_000).collect();
        let mut tree = RbTree::new();
        for &key in &keys {
            tree.insert(key).unwrap();
        }

        let mut cursor = tree.cursor();
        let mut count = 0i64;
        while let Some(&item) = cursor.next() {
            assert_eq!(item, count);
            count += 1;
        }
        assert_eq!(count, 100_000);
    }

    #[test]
    fn test_seek_after_exhausted_pass() {
        let tree = tree_with(&[1, 2, 3]);
        let mut cursor = tree.cursor();
        while cursor.next().is_some() {}
        assert_eq!(cursor.seek(&2), Some(&2));
        assert_eq!(cursor.next(), Some(&2));
        assert_eq!(cursor.next(), Some(&3));
    }
}
