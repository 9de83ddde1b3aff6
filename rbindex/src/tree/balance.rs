//! Rotation and recoloring primitives for red-black balance repair.
//!
//! These are pure, allocation-free, O(1) link edits invoked only by the
//! top-down insert and remove paths in [`super::tree`]; they are never
//! exposed publicly. The direction argument follows the node link
//! convention: `LEFT` rotates the right child up, `RIGHT` the left child.

use crate::tree::node::{is_red, Node, LEFT, RIGHT};

/// Single rotation of the subtree rooted at `node` in direction `dir`.
///
/// The demoted node turns red and the promoted child turns black, so the
/// black-height seen from above the subtree is unchanged.
///
/// # Safety
/// `node` and its `link[1 - dir]` child must be live node pointers.
pub(crate) unsafe fn rotate_single<T>(node: *mut Node<T>, dir: usize) -> *mut Node<T> {
    let save = (*node).link[1 - dir];

    (*node).link[1 - dir] = (*save).link[dir];
    (*save).link[dir] = node;

    (*node).red = true;
    (*save).red = false;

    save
}

/// Double rotation: first the child in the opposite direction, then the
/// node itself. Resolves the zig-zag red-red case that a single rotation
/// cannot fix.
///
/// # Safety
/// `node`, its `link[1 - dir]` child, and that child's `link[dir]` child
/// must all be live node pointers.
pub(crate) unsafe fn rotate_double<T>(node: *mut Node<T>, dir: usize) -> *mut Node<T> {
    (*node).link[1 - dir] = rotate_single((*node).link[1 - dir], 1 - dir);
    rotate_single(node, dir)
}

/// B-tree style pre-split: recolors `node` red and both children black.
///
/// Applied on the way down during insertion whenever a node has two red
/// children, so that a red leaf can always be attached further below
/// without creating more than one red-red violation at a time.
///
/// # Safety
/// `node` and both of its children must be live node pointers.
pub(crate) unsafe fn color_flip<T>(node: *mut Node<T>) {
    (*node).red = true;
    (*(*node).link[LEFT]).red = false;
    (*(*node).link[RIGHT]).red = false;
}
