//! Result of a maximum-subarray search

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Sum and half-open bounds `[begin, end)` of a contiguous subarray.
///
/// Sums are `i128` so that adding any number of `i64` elements cannot
/// overflow. An empty range always carries `sum == 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubarrayResult {
    /// Sum of `v[begin..end]`
    pub sum: i128,
    /// Inclusive start index
    pub begin: usize,
    /// Exclusive end index
    pub end: usize,
}

impl SubarrayResult {
    pub fn new(sum: i128, begin: usize, end: usize) -> Self {
        Self { sum, begin, end }
    }

    /// Zero-sum empty range positioned at `at`.
    pub fn empty_at(at: usize) -> Self {
        Self::new(0, at, at)
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.begin)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.begin
    }

    pub fn range(&self) -> Range<usize> {
        self.begin..self.end
    }

    /// The elements covered by this result.
    ///
    /// Returns `None` if the bounds do not fit `sequence`.
    pub fn slice<'a>(&self, sequence: &'a [i64]) -> Option<&'a [i64]> {
        sequence.get(self.range())
    }

    /// Check the bounds fit `sequence` and that `sum` matches the covered elements.
    pub fn is_consistent_with(&self, sequence: &[i64]) -> bool {
        match self.slice(sequence) {
            Some(elements) => elements.iter().map(|&x| i128::from(x)).sum::<i128>() == self.sum,
            None => false,
        }
    }
}

impl fmt::Display for SubarrayResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} over [{}, {})", self.sum, self.begin, self.end)
    }
}
