//! Quadratic reference solver
//!
//! Scans every `(begin, end)` pair using prefix sums. Too slow for real
//! inputs; used as the oracle in tests and as a baseline in benchmarks.

use super::result::SubarrayResult;

/// Maximum over all contiguous ranges of `sequence`, the empty range included.
///
/// Ties keep the first range in `(begin, end)` scan order, so the answer for
/// an all-negative sequence is `(0, 0, 0)`.
pub fn brute_force(sequence: &[i64]) -> SubarrayResult {
    let mut prefix = Vec::with_capacity(sequence.len() + 1);
    prefix.push(0i128);
    for &value in sequence {
        let last = prefix[prefix.len() - 1];
        prefix.push(last + i128::from(value));
    }

    let mut best = SubarrayResult::empty_at(0);
    for begin in 0..=sequence.len() {
        for end in begin..=sequence.len() {
            let sum = prefix[end] - prefix[begin];
            if sum > best.sum {
                best = SubarrayResult::new(sum, begin, end);
            }
        }
    }
    best
}
