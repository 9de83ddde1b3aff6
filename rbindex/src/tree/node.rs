use std::alloc::{alloc, dealloc, Layout};
use std::ptr;

use crate::errors::{ErrorKind, IndexError, IndexResult};

/// Index of the left (lesser) child link.
pub(crate) const LEFT: usize = 0;
/// Index of the right (greater) child link.
pub(crate) const RIGHT: usize = 1;

/// A single tree node.
///
/// A node owns its item and its two child subtrees exclusively. There are
/// no parent or sibling pointers anywhere in the structure; traversal
/// reconstructs ancestry with an explicit stack instead. Keeping the child
/// links in an array lets the balance code work symmetrically on a
/// direction index rather than duplicating left/right cases.
pub(crate) struct Node<T> {
    pub(crate) data: T,
    pub(crate) red: bool,
    pub(crate) link: [*mut Node<T>; 2],
}

impl<T> Node<T> {
    /// Allocates a new red leaf node holding `data`.
    ///
    /// New nodes are always red: attaching a red leaf never changes the
    /// black-height of any path, so only red-red violations can arise and
    /// the top-down insert repairs those during descent.
    ///
    /// # Errors
    /// Returns `OutOfMemory` if the heap allocation fails, instead of
    /// aborting the process.
    pub(crate) fn create(data: T) -> IndexResult<*mut Node<T>> {
        // Node always carries the color flag and two links, so the layout
        // is never zero-sized even for zero-sized item types.
        let layout = Layout::new::<Node<T>>();
        let raw = unsafe { alloc(layout) } as *mut Node<T>;
        if raw.is_null() {
            log::error!("Node allocation of {} bytes failed", layout.size());
            return Err(IndexError::new(
                "node allocation failed",
                ErrorKind::OutOfMemory,
            ));
        }

        unsafe {
            ptr::write(
                raw,
                Node {
                    data,
                    red: true,
                    link: [ptr::null_mut(), ptr::null_mut()],
                },
            );
        }
        Ok(raw)
    }

    /// Frees a node, returning its item to the caller.
    ///
    /// # Safety
    /// `node` must be a live pointer obtained from [`Node::create`] that is
    /// no longer reachable from any tree link after this call.
    pub(crate) unsafe fn destroy(node: *mut Node<T>) -> T {
        let data = ptr::read(ptr::addr_of!((*node).data));
        dealloc(node as *mut u8, Layout::new::<Node<T>>());
        data
    }
}

/// Null-safe color test: null links count as black.
#[inline]
pub(crate) fn is_red<T>(node: *mut Node<T>) -> bool {
    !node.is_null() && unsafe { (*node).red }
}
