//! Inbound Ports (Driving Ports)

use crate::domain::{SolverConfig, SubarrayResult};

/// Primary solver API (Driving Port)
pub trait MaxSubarrayApi: Send + Sync {
    /// Maximum-sum contiguous subarray of `sequence`.
    ///
    /// Total: every finite sequence, the empty one included, has an answer.
    fn max_subarray(&self, sequence: &[i64]) -> SubarrayResult;

    /// Active configuration
    fn config(&self) -> &SolverConfig;
}
