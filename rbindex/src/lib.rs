//! # rbindex - Ordered Associative Index
//!
//! `rbindex` is a generic sorted index structure: a from-scratch,
//! non-recursive, top-down red-black balanced binary search tree with
//! cursor-based traversal. It is meant as a low-level building block for
//! systems that need a sorted set with partial ordered scans, such as
//! attribute or category lookup tables.
//!
//! ## Key Features
//!
//! - **Balanced**: O(log n) insert, remove, and lookup guaranteed by the
//!   red-black coloring discipline
//! - **Top-down rebalancing**: insertion and deletion repair violations
//!   while descending, with no recursion and no parent pointers
//! - **Custom ordering**: a user-supplied three-way [`common::Comparator`]
//!   defines both sort order and key equality
//! - **Cursor traversal**: forward, backward, and seek-to-key ordered
//!   walks over an explicit ancestor stack
//! - **Recoverable allocation failure**: node allocation failure surfaces
//!   as an error value instead of aborting, leaving the tree valid
//! - **Self-validation**: a diagnostic invariant checker for test suites
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rbindex::tree::RbTree;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut tree: RbTree<i64> = RbTree::new();
//! for key in [10, 20, 5, 15, 25, 1] {
//!     tree.insert(key)?;
//! }
//!
//! assert_eq!(tree.find(&15), Some(&15));
//!
//! // ordered scan from an arbitrary start point
//! let mut cursor = tree.cursor();
//! cursor.seek(&12);
//! assert_eq!(cursor.next(), Some(&15));
//! assert_eq!(cursor.next(), Some(&20));
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! The tree performs no internal locking and is not safe for concurrent
//! mutation; callers needing shared access must serialize externally. It
//! is `Send`/`Sync` whenever the item and comparator types are, so a
//! single writer behind a mutex is sufficient.
//!
//! ## Module Organization
//!
//! - [`common`] - Comparator traits and traversal direction types
//! - [`errors`] - Error types and result definitions
//! - [`tree`] - The balanced tree container and its traversal cursor

pub mod common;
pub mod errors;
pub mod tree;
