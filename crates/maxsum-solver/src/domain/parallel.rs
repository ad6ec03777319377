//! # Parallel Divide-and-Conquer
//!
//! Evaluates the two recursive halves with `rayon::join`.
//!
//! ## Determinism
//!
//! Both halves and the crossing scan only read the borrowed sequence, and
//! `combine` is a pure function of the three finished candidates. The
//! result is therefore identical to `solver::solve`, whatever order the
//! halves finish in.
//!
//! Ranges shorter than the threshold fall back to the sequential solver.

use super::result::SubarrayResult;
use super::solver::{base_case, combine, max_crossing, midpoint, solve_range};

/// Smallest threshold accepted; below this every split is a base case.
pub const MIN_PARALLEL_THRESHOLD: usize = 2;

/// Solve `sequence`, splitting across the rayon pool while a range has at
/// least `threshold` elements.
pub fn solve_parallel(sequence: &[i64], threshold: usize) -> SubarrayResult {
    solve_range_parallel(
        sequence,
        0,
        sequence.len(),
        threshold.max(MIN_PARALLEL_THRESHOLD),
    )
}

fn solve_range_parallel(sequence: &[i64], b: usize, e: usize, threshold: usize) -> SubarrayResult {
    if e.saturating_sub(b) < threshold {
        return solve_range(sequence, b, e);
    }
    if let Some(result) = base_case(sequence, b, e) {
        return result;
    }

    let m = midpoint(b, e);
    let ((left, right), crossing) = rayon::join(
        || {
            rayon::join(
                || solve_range_parallel(sequence, b, m, threshold),
                || solve_range_parallel(sequence, m, e, threshold),
            )
        },
        || max_crossing(sequence, b, m, e),
    );

    combine(left, right, crossing)
}
