//! Divide-and-conquer maximum contiguous subarray
//!
//! ## Algorithm
//!
//! For a range `[b, e)` with more than one element, split at
//! `m = floor((b + e) / 2)`, solve `[b, m)` and `[m, e)` recursively, then
//! compute the best subarray crossing `m`:
//!
//! - extend right from `m`, keeping the strictly greatest positive prefix sum
//! - extend left from `m - 1`, keeping the strictly greatest positive suffix sum
//!
//! The three candidates are folded in the order left, right, crossing. A
//! candidate replaces the current best only if its sum is strictly greater,
//! so ties resolve to the left half.
//!
//! `T(n) = 2T(n/2) + O(n)`, i.e. `O(n log n)` time and `O(log n)` stack.

use super::result::SubarrayResult;

/// Maximum-sum contiguous subarray of `sequence`.
///
/// Never fails. The empty sequence yields `(0, 0, 0)` and an all-negative
/// sequence yields a zero-sum empty range.
pub fn solve(sequence: &[i64]) -> SubarrayResult {
    solve_range(sequence, 0, sequence.len())
}

/// Maximum-sum contiguous subarray within `[b, e)`.
///
/// # Panics
/// If `e > sequence.len()`.
pub fn solve_range(sequence: &[i64], b: usize, e: usize) -> SubarrayResult {
    if let Some(result) = base_case(sequence, b, e) {
        return result;
    }

    let m = midpoint(b, e);
    let left = solve_range(sequence, b, m);
    let right = solve_range(sequence, m, e);
    let crossing = max_crossing(sequence, b, m, e);

    combine(left, right, crossing)
}

/// Result for ranges of length 0 or 1, `None` otherwise.
///
/// A negative singleton is never preferred over the empty range at the same
/// position.
pub fn base_case(sequence: &[i64], b: usize, e: usize) -> Option<SubarrayResult> {
    if e <= b {
        return Some(SubarrayResult::new(0, b, e));
    }
    if e == b + 1 {
        let value = i128::from(sequence[b]);
        if value < 0 {
            return Some(SubarrayResult::empty_at(b));
        }
        return Some(SubarrayResult::new(value, b, e));
    }
    None
}

/// `floor((b + e) / 2)` for `b <= e`, without overflow.
pub fn midpoint(b: usize, e: usize) -> usize {
    b + (e - b) / 2
}

/// Best subarray straddling `m` within `[b, e)`.
///
/// Either extension may be empty, in which case its bound stays at `m` and
/// it contributes 0. The returned sum always equals the sum over
/// `[begin, end)`.
pub fn max_crossing(sequence: &[i64], b: usize, m: usize, e: usize) -> SubarrayResult {
    // Right extension: [m, ec)
    let mut running: i128 = 0;
    let mut right_sum: i128 = 0;
    let mut ec = m;
    for (offset, &value) in sequence[m..e].iter().enumerate() {
        running += i128::from(value);
        if running > right_sum {
            right_sum = running;
            ec = m + offset + 1;
        }
    }

    // Left extension: [bc, m)
    running = 0;
    let mut left_sum: i128 = 0;
    let mut bc = m;
    for (offset, &value) in sequence[b..m].iter().enumerate().rev() {
        running += i128::from(value);
        if running > left_sum {
            left_sum = running;
            bc = b + offset;
        }
    }

    SubarrayResult::new(left_sum + right_sum, bc, ec)
}

/// Fold the three candidates left, right, crossing with strict-greater
/// replacement.
///
/// Not a max over `(sum, begin, end)` tuples: that would order ties by
/// position instead of by half.
pub fn combine(
    left: SubarrayResult,
    right: SubarrayResult,
    crossing: SubarrayResult,
) -> SubarrayResult {
    [right, crossing]
        .into_iter()
        .fold(left, |best, candidate| {
            if candidate.sum > best.sum {
                candidate
            } else {
                best
            }
        })
}

/// Number of recursion levels below the root for a range of `len` elements.
///
/// Equals `ceil(log2(len))` for `len >= 2` and 0 otherwise.
pub fn recursion_depth(len: usize) -> usize {
    if len <= 1 {
        return 0;
    }
    (usize::BITS - (len - 1).leading_zeros()) as usize
}
