//! Common types and utilities shared across the crate.

mod comparator;
mod traversal_order;

pub use comparator::*;
pub use traversal_order::*;

use parking_lot::RwLock;
use std::sync::Arc;

/// Thread-safe shared mutable cell, used for lazily captured diagnostics.
pub(crate) type Atomic<T> = Arc<RwLock<T>>;

pub(crate) fn atomic<T>(t: T) -> Atomic<T> {
    Arc::new(RwLock::new(t))
}
