//! Max Subarray Service
//!
//! Implements `MaxSubarrayApi` on top of the domain solvers.

use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::domain::{recursion_depth, solve, solve_parallel, SolverConfig, SubarrayResult};
use crate::error::{ConfigError, RunError};
use crate::metrics::{MetricsRecorder, NoOpMetrics};
use crate::ports::{MaxSubarrayApi, ResultSink, SequenceSource};

/// Max subarray service implementation
pub struct MaxSubarrayService<M: MetricsRecorder = NoOpMetrics> {
    config: SolverConfig,
    metrics: Arc<M>,
}

impl MaxSubarrayService<NoOpMetrics> {
    /// Create a service without metrics
    pub fn new(config: SolverConfig) -> Result<Self, ConfigError> {
        Self::with_metrics(config, Arc::new(NoOpMetrics))
    }
}

impl Default for MaxSubarrayService<NoOpMetrics> {
    fn default() -> Self {
        Self {
            config: SolverConfig::default(),
            metrics: Arc::new(NoOpMetrics),
        }
    }
}

impl<M: MetricsRecorder> MaxSubarrayService<M> {
    /// Create a service reporting to `metrics`
    pub fn with_metrics(config: SolverConfig, metrics: Arc<M>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, metrics })
    }

    pub fn metrics(&self) -> &Arc<M> {
        &self.metrics
    }

    /// Read a sequence from `source`, solve it and hand the result to `sink`.
    ///
    /// I/O failures are returned as-is; the solve step itself cannot fail.
    pub fn run<S, K>(&self, source: &mut S, sink: &mut K) -> Result<SubarrayResult, RunError>
    where
        S: SequenceSource,
        K: ResultSink,
    {
        let sequence = source.read_sequence()?;
        let result = self.max_subarray(&sequence);
        sink.write_result(&result)?;
        Ok(result)
    }
}

impl<M: MetricsRecorder> MaxSubarrayApi for MaxSubarrayService<M> {
    fn max_subarray(&self, sequence: &[i64]) -> SubarrayResult {
        let len = sequence.len();
        let parallel = self.config.splits_in_parallel(len);

        debug!(
            len,
            depth = recursion_depth(len),
            parallel,
            "Solving maximum subarray"
        );

        let start = Instant::now();
        let result = if parallel {
            solve_parallel(sequence, self.config.parallel_threshold)
        } else {
            solve(sequence)
        };
        let elapsed = start.elapsed();

        self.metrics.record_solve(len, parallel, elapsed);

        debug!(
            sum = %result.sum,
            begin = result.begin,
            end = result.end,
            elapsed_us = elapsed.as_micros() as u64,
            "Maximum subarray found"
        );

        result
    }

    fn config(&self) -> &SolverConfig {
        &self.config
    }
}
