//! The balanced index tree and its traversal cursor.
//!
//! This module implements the ordered index as a non-recursive, top-down
//! red-black tree. Four cooperating pieces make it up:
//!
//! - `node`: node lifecycle, the allocation and freeing of individual
//!   nodes holding the item, two child links, and a color bit
//! - `balance`: single/double rotations and the color flip used to repair
//!   red-black violations during descent
//! - [`RbTree`]: the container owning the root, comparator, and element
//!   count, with insert/remove/find/clear/validate
//! - [`TreeCursor`]: an explicit-stack iterator for forward, backward,
//!   and arbitrary-start-point ordered walks
//!
//! # Invariants
//!
//! Every public mutating operation preserves: binary search tree order
//! under the comparator (with duplicates rejected), no red node with a
//! red child, equal black-height on all root-to-null paths, a black root,
//! and an element count equal to the number of reachable nodes.
//! [`RbTree::validate`] checks all of these for test suites.

mod balance;
mod cursor;
mod node;
#[allow(clippy::module_inception)]
mod tree;

pub use cursor::*;
pub use tree::*;
