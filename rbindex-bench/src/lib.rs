//! Shared data generation for the benchmark suite.

use rand::seq::SliceRandom;
use rand::thread_rng;

/// Returns `count` distinct keys in shuffled insertion order.
pub fn shuffled_keys(count: i64) -> Vec<i64> {
    let mut keys: Vec<i64> = (0..count).collect();
    keys.shuffle(&mut thread_rng());
    keys
}
