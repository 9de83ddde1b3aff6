use std::cmp::Ordering;
use std::mem::MaybeUninit;
use std::ptr::{self, addr_of, addr_of_mut};

use crate::common::{Comparator, NaturalOrder};
use crate::errors::IndexResult;
use crate::tree::balance::{color_flip, rotate_double, rotate_single};
use crate::tree::cursor::TreeCursor;
use crate::tree::node::{is_red, Node, LEFT, RIGHT};

/// Outcome of a successful [`RbTree::insert`] call.
///
/// Inserting a key that is already present is a deliberate no-op, not an
/// error, but callers that care can tell the two success cases apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A new node was created for the item
    Inserted,
    /// An equal key was already present; the tree is unchanged
    AlreadyPresent,
}

impl InsertOutcome {
    /// Returns `true` if the insert created a new node.
    pub fn is_inserted(&self) -> bool {
        matches!(self, InsertOutcome::Inserted)
    }
}

/// Ordered associative index backed by a red-black balanced binary search
/// tree.
///
/// # Purpose
/// `RbTree` keeps a set of items sorted under a user-supplied three-way
/// [`Comparator`], with O(log n) insertion, removal, and point lookup, and
/// cursor-based ordered traversal that can start from an arbitrary key
/// (see [`TreeCursor::seek`]). The comparator alone defines key equality:
/// items that compare `Equal` are the same key, and duplicates are
/// rejected rather than merged (set semantics).
///
/// # Characteristics
/// - **Top-down balancing**: insert and remove repair red-black violations
///   while descending, with no recursion and no second bottom-up pass
/// - **No parent pointers**: each node stores only two child links and a
///   color bit; traversal reconstructs ancestry with an explicit stack
/// - **Recoverable allocation failure**: a failed node allocation surfaces
///   as [`crate::errors::ErrorKind::OutOfMemory`] and leaves the tree
///   structurally valid and unchanged in content
/// - **Single-threaded mutation**: no internal locking; callers needing
///   concurrent access must serialize externally. The tree is `Send`/`Sync`
///   exactly when the item and comparator types are.
///
/// # Usage
/// ```rust,ignore
/// use rbindex::tree::RbTree;
///
/// let mut tree: RbTree<i64> = RbTree::new();
/// tree.insert(10)?;
/// tree.insert(5)?;
/// assert_eq!(tree.find(&10), Some(&10));
///
/// let mut cursor = tree.cursor();
/// while let Some(item) = cursor.next() {
///     println!("{}", item);
/// }
/// ```
pub struct RbTree<T, C = NaturalOrder> {
    pub(crate) root: *mut Node<T>,
    pub(crate) comparator: C,
    pub(crate) len: usize,
}

// The raw child links are exclusively owned by the tree, so thread safety
// reduces to that of the item and comparator types, as for Box.
unsafe impl<T: Send, C: Send> Send for RbTree<T, C> {}
unsafe impl<T: Sync, C: Sync> Sync for RbTree<T, C> {}

impl<T: Ord> RbTree<T, NaturalOrder> {
    /// Creates an empty tree ordered by the item type's `Ord`
    /// implementation.
    ///
    /// Construction allocates nothing and cannot fail.
    pub fn new() -> Self {
        RbTree::with_comparator(NaturalOrder)
    }
}

impl<T: Ord> Default for RbTree<T, NaturalOrder> {
    fn default() -> Self {
        RbTree::new()
    }
}

impl<T, C> RbTree<T, C> {
    /// Returns the number of items in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes and frees every node.
    ///
    /// Runs in O(n) without recursion and without an auxiliary stack:
    /// left children are rotated away one at a time, turning the tree into
    /// a right-leaning spine, and each node is freed once it has no left
    /// child.
    pub fn clear(&mut self) {
        let mut it = self.root;

        unsafe {
            while !it.is_null() {
                let save;
                if (*it).link[LEFT].is_null() {
                    save = (*it).link[RIGHT];
                    drop(Node::destroy(it));
                } else {
                    save = (*it).link[LEFT];
                    (*it).link[LEFT] = (*save).link[RIGHT];
                    (*save).link[RIGHT] = it;
                }
                it = save;
            }
        }

        self.root = ptr::null_mut();
        self.len = 0;
    }
}

impl<T, C: Comparator<T>> RbTree<T, C> {
    /// Creates an empty tree ordered by the given comparator.
    ///
    /// The comparator is owned by the tree and must order items
    /// consistently for the tree's whole lifetime.
    pub fn with_comparator(comparator: C) -> Self {
        RbTree {
            root: ptr::null_mut(),
            comparator,
            len: 0,
        }
    }

    /// Inserts an item, keeping the tree balanced.
    ///
    /// Uses non-recursive top-down red-black insertion: a
    /// grandparent/parent/current sliding window walks down from the root
    /// behind a false-root sentinel, splitting nodes with two red children
    /// by a color flip and repairing any red-red violation with a single
    /// or double rotation before descending past it. No bottom-up fix-up
    /// pass is needed afterwards.
    ///
    /// # Returns
    /// `InsertOutcome::Inserted` if a new node was created, or
    /// `InsertOutcome::AlreadyPresent` if an equal key already exists (in
    /// which case the item is dropped and the tree is unchanged).
    ///
    /// # Errors
    /// `OutOfMemory` if node allocation fails. The recolorings and
    /// rotations performed during descent each preserve the tree
    /// invariants on their own, so the tree remains valid and its content
    /// unchanged on this path.
    pub fn insert(&mut self, item: T) -> IndexResult<InsertOutcome> {
        unsafe {
            if self.root.is_null() {
                let node = Node::create(item)?;
                (*node).red = false;
                self.root = node;
                self.len = 1;
                return Ok(InsertOutcome::Inserted);
            }

            // False root above the real one; only its color and links are
            // ever touched, the data slot stays uninitialized.
            let mut head = MaybeUninit::<Node<T>>::uninit();
            let head_ptr = head.as_mut_ptr();
            addr_of_mut!((*head_ptr).red).write(false);
            addr_of_mut!((*head_ptr).link).write([ptr::null_mut(), self.root]);

            let mut t: *mut Node<T> = head_ptr; // great-grandparent
            let mut g: *mut Node<T> = ptr::null_mut(); // grandparent
            let mut p: *mut Node<T> = ptr::null_mut(); // parent
            let mut q: *mut Node<T> = self.root; // iterator
            let mut dir = LEFT;
            let mut last = LEFT;
            let mut item = Some(item);
            let mut inserted = false;

            loop {
                if q.is_null() {
                    // attach a new red node below p
                    let Some(data) = item.take() else {
                        break; // unreachable: at most one node per insert
                    };
                    q = match Node::create(data) {
                        Ok(node) => node,
                        Err(err) => {
                            // the descent so far left a valid tree behind
                            self.root = (*head_ptr).link[RIGHT];
                            (*self.root).red = false;
                            return Err(err);
                        }
                    };
                    (*p).link[dir] = q;
                    inserted = true;
                } else if is_red((*q).link[LEFT]) && is_red((*q).link[RIGHT]) {
                    color_flip(q);
                }

                // a red node may not have a red parent; rotate the
                // violation away before descending past it
                if is_red(q) && is_red(p) {
                    let dir2 = if (*t).link[RIGHT] == g { RIGHT } else { LEFT };
                    if q == (*p).link[last] {
                        (*t).link[dir2] = rotate_single(g, 1 - last);
                    } else {
                        (*t).link[dir2] = rotate_double(g, 1 - last);
                    }
                }

                let Some(key) = item.as_ref() else {
                    break; // the new node is in place and repaired
                };

                match self.comparator.compare(&(*q).data, key) {
                    Ordering::Equal => break,
                    ord => {
                        last = dir;
                        dir = if ord == Ordering::Less { RIGHT } else { LEFT };

                        if !g.is_null() {
                            t = g;
                        }
                        g = p;
                        p = q;
                        q = (*q).link[dir];
                    }
                }
            }

            self.root = (*head_ptr).link[RIGHT];
            (*self.root).red = false;

            if inserted {
                self.len += 1;
                Ok(InsertOutcome::Inserted)
            } else {
                Ok(InsertOutcome::AlreadyPresent)
            }
        }
    }

    /// Removes the item equal to `key`, returning it.
    ///
    /// Uses non-recursive top-down deletion: while descending toward the
    /// match, the tree is proactively rotated and recolored so that a red
    /// node is pushed down the search path ("push a red down") and the
    /// node physically unlinked never breaks the black-height invariant.
    /// An interior match is spliced with the data of its in-order
    /// successor, whose now-unlinked node is the one actually freed.
    ///
    /// # Returns
    /// The removed item, or `None` if no equal key exists (the tree is
    /// unchanged; an absent key is a normal outcome, not an error).
    pub fn remove(&mut self, key: &T) -> Option<T> {
        if self.root.is_null() {
            return None;
        }

        unsafe {
            let mut head = MaybeUninit::<Node<T>>::uninit();
            let head_ptr = head.as_mut_ptr();
            addr_of_mut!((*head_ptr).red).write(false);
            addr_of_mut!((*head_ptr).link).write([ptr::null_mut(), self.root]);

            let mut q: *mut Node<T> = head_ptr;
            let mut p: *mut Node<T> = ptr::null_mut();
            let mut g: *mut Node<T> = ptr::null_mut();
            let mut f: *mut Node<T> = ptr::null_mut(); // matched node, if any
            let mut dir = RIGHT;

            while !(*q).link[dir].is_null() {
                let last = dir;
                g = p;
                p = q;
                q = (*q).link[dir];

                let ord = self.comparator.compare(&(*q).data, key);
                if ord == Ordering::Equal {
                    f = q;
                }
                // an interior match keeps descending right, so the walk
                // bottoms out at its in-order successor
                dir = if ord == Ordering::Greater { LEFT } else { RIGHT };

                if !is_red(q) && !is_red((*q).link[dir]) {
                    if is_red((*q).link[1 - dir]) {
                        let rotated = rotate_single(q, dir);
                        (*p).link[last] = rotated;
                        p = rotated;
                    } else {
                        let s = (*p).link[1 - last];
                        if !s.is_null() {
                            if !is_red((*s).link[1 - last]) && !is_red((*s).link[last]) {
                                // both of the sibling's children are
                                // black; a color flip suffices
                                (*p).red = false;
                                (*s).red = true;
                                (*q).red = true;
                            } else {
                                let dir2 = if (*g).link[RIGHT] == p { RIGHT } else { LEFT };
                                if is_red((*s).link[last]) {
                                    (*g).link[dir2] = rotate_double(p, last);
                                } else {
                                    (*g).link[dir2] = rotate_single(p, last);
                                }

                                let n = (*g).link[dir2];
                                (*q).red = true;
                                (*n).red = true;
                                (*(*n).link[LEFT]).red = false;
                                (*(*n).link[RIGHT]).red = false;
                            }
                        }
                    }
                }
            }

            let removed = if f.is_null() {
                None
            } else {
                // unlink the terminal node: as the end of the search path
                // it has at most one child
                let pdir = if (*p).link[RIGHT] == q { RIGHT } else { LEFT };
                let qdir = if (*q).link[LEFT].is_null() { RIGHT } else { LEFT };
                (*p).link[pdir] = (*q).link[qdir];

                if f == q {
                    Some(Node::destroy(q))
                } else {
                    // splice the successor's data into the matched node
                    // and hand the matched data back to the caller
                    let successor_data = Node::destroy(q);
                    let removed_data = ptr::read(addr_of!((*f).data));
                    ptr::write(addr_of_mut!((*f).data), successor_data);
                    Some(removed_data)
                }
            };

            self.root = (*head_ptr).link[RIGHT];
            if !self.root.is_null() {
                (*self.root).red = false;
            }

            if removed.is_some() {
                self.len -= 1;
            }
            removed
        }
    }

    /// Looks up the item equal to `key`.
    ///
    /// Plain binary search descent, O(log n) thanks to the balance
    /// guarantee. The returned reference borrows the tree, so it cannot be
    /// held across a subsequent mutating call.
    pub fn find(&self, key: &T) -> Option<&T> {
        let mut it = self.root;

        unsafe {
            while !it.is_null() {
                match self.comparator.compare(&(*it).data, key) {
                    Ordering::Equal => return Some(&(*it).data),
                    Ordering::Less => it = (*it).link[RIGHT],
                    Ordering::Greater => it = (*it).link[LEFT],
                }
            }
        }
        None
    }

    /// Returns `true` if an item equal to `key` is present.
    pub fn contains(&self, key: &T) -> bool {
        self.find(key).is_some()
    }

    /// Creates a cursor over the tree.
    ///
    /// The cursor borrows the tree immutably, so the borrow checker
    /// guarantees it cannot observe (or survive) a concurrent mutation.
    pub fn cursor(&self) -> TreeCursor<'_, T, C> {
        TreeCursor::new(self)
    }

    /// Checks the structural invariants, for test and debug use.
    ///
    /// Verifies binary search tree ordering, the no-red-red rule, equal
    /// black-height on every root-to-null path, a black root, and that
    /// the element count matches the number of reachable nodes. Logs a
    /// diagnostic and returns `false` on the first violation found.
    ///
    /// The walk is iterative with an explicit stack; each frame carries
    /// the black count accumulated so far and the exclusive ordering
    /// bounds inherited from the ancestors.
    pub fn validate(&self) -> bool {
        unsafe {
            if self.root.is_null() {
                if self.len != 0 {
                    log::error!("empty tree reports {} elements", self.len);
                    return false;
                }
                return true;
            }

            if (*self.root).red {
                log::error!("root node is red");
                return false;
            }

            // (node, black nodes above it, lower bound, upper bound)
            let mut stack: Vec<(*mut Node<T>, usize, *const T, *const T)> =
                vec![(self.root, 0, ptr::null(), ptr::null())];
            let mut leaf_blacks: Option<usize> = None;
            let mut reachable = 0usize;

            while let Some((node, blacks, lower, upper)) = stack.pop() {
                if node.is_null() {
                    match leaf_blacks {
                        None => leaf_blacks = Some(blacks),
                        Some(expected) if expected != blacks => {
                            log::error!(
                                "black-height mismatch: path has {} black nodes, expected {}",
                                blacks,
                                expected
                            );
                            return false;
                        }
                        _ => {}
                    }
                    continue;
                }

                reachable += 1;
                let red = (*node).red;
                if red && (is_red((*node).link[LEFT]) || is_red((*node).link[RIGHT])) {
                    log::error!("red node has a red child");
                    return false;
                }

                let data = addr_of!((*node).data);
                if !lower.is_null()
                    && self.comparator.compare(&*lower, &*data) != Ordering::Less
                {
                    log::error!("binary search tree order violated in left subtree");
                    return false;
                }
                if !upper.is_null()
                    && self.comparator.compare(&*data, &*upper) != Ordering::Less
                {
                    log::error!("binary search tree order violated in right subtree");
                    return false;
                }

                let below = blacks + usize::from(!red);
                stack.push(((*node).link[LEFT], below, lower, data));
                stack.push(((*node).link[RIGHT], below, data, upper));
            }

            if reachable != self.len {
                log::error!(
                    "element count {} does not match {} reachable nodes",
                    self.len,
                    reachable
                );
                return false;
            }
            true
        }
    }
}

impl<T, C> Drop for RbTree<T, C> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(feature = "serde")]
impl<T, C> serde::Serialize for RbTree<T, C>
where
    T: serde::Serialize,
    C: Comparator<T>,
{
    /// Serializes the tree as its ascending item sequence.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;

        let mut seq = serializer.serialize_seq(Some(self.len))?;
        let mut cursor = self.cursor();
        while let Some(item) = cursor.next() {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for RbTree<T, NaturalOrder>
where
    T: serde::Deserialize<'de> + Ord,
{
    /// Rebuilds a tree from an item sequence by insertion.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use std::marker::PhantomData;

        struct TreeVisitor<T>(PhantomData<T>);

        impl<'de, T> serde::de::Visitor<'de> for TreeVisitor<T>
        where
            T: serde::Deserialize<'de> + Ord,
        {
            type Value = RbTree<T, NaturalOrder>;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a sequence of ordered index items")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: serde::de::SeqAccess<'de>,
            {
                let mut tree = RbTree::new();
                while let Some(item) = seq.next_element()? {
                    tree.insert(item).map_err(serde::de::Error::custom)?;
                }
                Ok(tree)
            }
        }

        deserializer.deserialize_seq(TreeVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::FnComparator;

    #[ctor::ctor]
    fn init_test_logging() {
        colog::init();
    }

    fn tree_with(keys: &[i64]) -> RbTree<i64> {
        let mut tree = RbTree::new();
        for &key in keys {
            tree.insert(key).unwrap();
        }
        tree
    }

    fn collect(tree: &RbTree<i64>) -> Vec<i64> {
        let mut out = Vec::new();
        let mut cursor = tree.cursor();
        while let Some(&item) = cursor.next() {
            out.push(item);
        }
        out
    }

    #[test]
    fn test_new_tree_is_empty() {
        let tree: RbTree<i64> = RbTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert!(tree.validate());
    }

    #[test]
    fn test_insert_outcome() {
        let mut tree = RbTree::new();
        assert_eq!(tree.insert(7).unwrap(), InsertOutcome::Inserted);
        assert!(tree.insert(7).unwrap() == InsertOutcome::AlreadyPresent);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_duplicate_insert_keeps_one_entry() {
        let mut tree = tree_with(&[3, 1, 2]);
        assert_eq!(tree.insert(2).unwrap(), InsertOutcome::AlreadyPresent);
        assert_eq!(tree.len(), 3);
        assert_eq!(collect(&tree), vec![1, 2, 3]);
        assert!(tree.validate());
    }

    #[test]
    fn test_find_hit_and_miss() {
        let tree = tree_with(&[10, 20, 5, 15, 25, 1]);
        assert_eq!(tree.find(&15), Some(&15));
        assert_eq!(tree.find(&99), None);
        assert!(tree.contains(&5));
        assert!(!tree.contains(&6));
    }

    #[test]
    fn test_scenario_ordered_traversal() {
        let tree = tree_with(&[10, 20, 5, 15, 25, 1]);
        assert_eq!(collect(&tree), vec![1, 5, 10, 15, 20, 25]);
        assert!(tree.validate());
    }

    #[test]
    fn test_scenario_remove_interior() {
        let mut tree = tree_with(&[10, 20, 5, 15, 25, 1]);
        assert_eq!(tree.remove(&10), Some(10));
        assert_eq!(tree.len(), 5);
        assert_eq!(collect(&tree), vec![1, 5, 15, 20, 25]);
        assert!(tree.validate());
    }

    #[test]
    fn test_remove_absent_key() {
        let mut tree = tree_with(&[1, 2, 3]);
        assert_eq!(tree.remove(&42), None);
        assert_eq!(tree.len(), 3);
        assert!(tree.validate());
    }

    #[test]
    fn test_remove_from_empty_tree() {
        let mut tree: RbTree<i64> = RbTree::new();
        assert_eq!(tree.remove(&1), None);
    }

    #[test]
    fn test_remove_leaf_and_root() {
        let mut tree = tree_with(&[2, 1, 3]);
        assert_eq!(tree.remove(&1), Some(1));
        assert!(tree.validate());
        assert_eq!(tree.remove(&2), Some(2));
        assert!(tree.validate());
        assert_eq!(tree.remove(&3), Some(3));
        assert!(tree.is_empty());
        assert!(tree.validate());
    }

    #[test]
    fn test_remove_single_node() {
        let mut tree = tree_with(&[5]);
        assert_eq!(tree.remove(&5), Some(5));
        assert!(tree.is_empty());
        assert!(tree.root.is_null());
    }

    #[test]
    fn test_insert_then_remove_round_trip() {
        let mut tree = tree_with(&[10, 20, 5, 15, 25, 1]);
        let before = collect(&tree);
        assert_eq!(tree.insert(12).unwrap(), InsertOutcome::Inserted);
        assert_eq!(tree.remove(&12), Some(12));
        assert_eq!(tree.len(), 6);
        assert_eq!(collect(&tree), before);
        assert!(tree.validate());
    }

    #[test]
    fn test_ascending_insertions_stay_balanced() {
        let mut tree = RbTree::new();
        for key in 0..256 {
            tree.insert(key).unwrap();
            assert!(tree.validate());
        }
        assert_eq!(tree.len(), 256);
        assert_eq!(collect(&tree), (0..256).collect::<Vec<_>>());
    }

    #[test]
    fn test_descending_insertions_stay_balanced() {
        let mut tree = RbTree::new();
        for key in (0..256).rev() {
            tree.insert(key).unwrap();
        }
        assert!(tree.validate());
        assert_eq!(collect(&tree), (0..256).collect::<Vec<_>>());
    }

    #[test]
    fn test_remove_all_ascending() {
        let mut tree = tree_with(&(0..128).collect::<Vec<_>>());
        for key in 0..128 {
            assert_eq!(tree.remove(&key), Some(key));
            assert!(tree.validate());
        }
        assert!(tree.is_empty());
        assert!(tree.root.is_null());
    }

    #[test]
    fn test_clear() {
        let mut tree = tree_with(&[4, 2, 6, 1, 3, 5, 7]);
        tree.clear();
        assert!(tree.is_empty());
        assert!(tree.root.is_null());
        assert!(tree.validate());
        // the tree is reusable after a clear
        tree.insert(9).unwrap();
        assert_eq!(collect(&tree), vec![9]);
    }

    #[test]
    fn test_custom_comparator_reverses_order() {
        let reversed = FnComparator::new(|a: &i64, b: &i64| b.cmp(a));
        let mut tree = RbTree::with_comparator(reversed);
        for key in [1, 3, 2] {
            tree.insert(key).unwrap();
        }
        assert!(tree.validate());

        let mut out = Vec::new();
        let mut cursor = tree.cursor();
        while let Some(&item) = cursor.next() {
            out.push(item);
        }
        assert_eq!(out, vec![3, 2, 1]);
        assert_eq!(tree.find(&2), Some(&2));
    }

    #[test]
    fn test_validate_detects_count_drift() {
        let mut tree = tree_with(&[1, 2, 3]);
        tree.len = 5;
        assert!(!tree.validate());
        tree.len = 3;
        assert!(tree.validate());
    }

    #[test]
    fn test_validate_detects_red_root() {
        let tree = tree_with(&[1, 2, 3]);
        unsafe {
            (*tree.root).red = true;
        }
        assert!(!tree.validate());
        unsafe {
            (*tree.root).red = false;
        }
        assert!(tree.validate());
    }

    #[test]
    fn test_random_mixed_operations() {
        use rand::seq::SliceRandom;
        use rand::thread_rng;

        let mut keys: Vec<i64> = (0..200).collect();
        keys.shuffle(&mut thread_rng());

        let mut tree = RbTree::new();
        for &key in &keys {
            tree.insert(key).unwrap();
        }
        assert!(tree.validate());
        assert_eq!(tree.len(), 200);

        keys.shuffle(&mut thread_rng());
        for &key in &keys[..100] {
            assert_eq!(tree.remove(&key), Some(key));
        }
        assert!(tree.validate());
        assert_eq!(tree.len(), 100);
    }

    #[test]
    fn test_owned_items_are_dropped() {
        let mut tree: RbTree<String> = RbTree::new();
        tree.insert(String::from("a")).unwrap();
        tree.insert(String::from("b")).unwrap();
        assert_eq!(tree.remove(&String::from("a")), Some(String::from("a")));
        // remaining node freed by Drop
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_as_sorted_sequence() {
        let tree = tree_with(&[10, 20, 5, 15, 25, 1]);
        let json = serde_json::to_string(&tree).unwrap();
        assert_eq!(json, "[1,5,10,15,20,25]");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_rebuilds_tree() {
        let tree: RbTree<i64> = serde_json::from_str("[25,1,10,5,20,15]").unwrap();
        assert_eq!(tree.len(), 6);
        assert_eq!(collect(&tree), vec![1, 5, 10, 15, 20, 25]);
        assert!(tree.validate());
    }
}
