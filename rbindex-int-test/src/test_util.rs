//! Shared helpers for the integration test suite.

use std::cmp::Ordering;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
use std::sync::Arc;

/// Counter shared by all [`Tracked`] items of one test, recording how many
/// instances are currently alive. A tree that frees every node brings the
/// counter back to zero.
#[derive(Clone, Default)]
pub struct LiveCounter {
    live: Arc<AtomicUsize>,
}

impl LiveCounter {
    pub fn new() -> Self {
        LiveCounter::default()
    }

    pub fn live(&self) -> usize {
        self.live.load(AtomicOrdering::SeqCst)
    }
}

/// Heap-owning test item that reports construction and destruction to a
/// [`LiveCounter`], ordered by its key alone.
pub struct Tracked {
    pub key: i64,
    counter: Arc<AtomicUsize>,
}

impl Tracked {
    pub fn new(key: i64, counter: &LiveCounter) -> Self {
        counter.live.fetch_add(1, AtomicOrdering::SeqCst);
        Tracked {
            key,
            counter: counter.live.clone(),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.counter.fetch_sub(1, AtomicOrdering::SeqCst);
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Tracked {}

impl PartialOrd for Tracked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tracked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Returns `count` distinct pseudo-random keys in shuffled order.
pub fn shuffled_keys(count: i64) -> Vec<i64> {
    use rand::seq::SliceRandom;
    use rand::thread_rng;

    let mut keys: Vec<i64> = (0..count).collect();
    keys.shuffle(&mut thread_rng());
    keys
}
