//! Metrics hooks for solve operations
//!
//! ## Usage
//!
//! ```ignore
//! use maxsum_solver::metrics::Metrics;
//!
//! let metrics = Metrics::new();
//! let start = std::time::Instant::now();
//! let result = solve(&sequence);
//! metrics.record_solve(sequence.len(), false, start.elapsed());
//! ```

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Metrics collector for solve operations
///
/// Thread-safe counters, shareable behind an `Arc`.
#[derive(Default)]
pub struct Metrics {
    /// Total solve calls
    pub solves: AtomicU64,
    /// Total input elements across all solves
    pub elements_processed: AtomicU64,
    /// Solves that split their top-level range in parallel
    pub parallel_solves: AtomicU64,
    /// Cumulative solve time in nanoseconds
    pub solve_time_ns: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished solve
    ///
    /// # Arguments
    /// * `len` - Input length
    /// * `parallel` - Whether the top-level range was split across threads
    /// * `duration` - Wall time of the solve
    pub fn record_solve(&self, len: usize, parallel: bool, duration: Duration) {
        self.solves.fetch_add(1, Ordering::Relaxed);
        self.elements_processed
            .fetch_add(len as u64, Ordering::Relaxed);
        if parallel {
            self.parallel_solves.fetch_add(1, Ordering::Relaxed);
        }
        self.solve_time_ns
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            solves: self.solves.load(Ordering::Relaxed),
            elements_processed: self.elements_processed.load(Ordering::Relaxed),
            parallel_solves: self.parallel_solves.load(Ordering::Relaxed),
            avg_solve_ns: self.avg_solve_time_ns(),
        }
    }

    /// Average solve time in nanoseconds
    pub fn avg_solve_time_ns(&self) -> u64 {
        let total = self.solve_time_ns.load(Ordering::Relaxed);
        let count = self.solves.load(Ordering::Relaxed);
        if count > 0 {
            total / count
        } else {
            0
        }
    }

    pub fn reset(&self) {
        self.solves.store(0, Ordering::Relaxed);
        self.elements_processed.store(0, Ordering::Relaxed);
        self.parallel_solves.store(0, Ordering::Relaxed);
        self.solve_time_ns.store(0, Ordering::Relaxed);
    }
}

/// Point-in-time metrics snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub solves: u64,
    pub elements_processed: u64,
    pub parallel_solves: u64,
    pub avg_solve_ns: u64,
}

/// Trait for custom metrics recording implementations
pub trait MetricsRecorder: Send + Sync {
    fn record_solve(&self, len: usize, parallel: bool, duration: Duration);
}

/// No-op metrics recorder for when metrics are disabled
#[derive(Default)]
pub struct NoOpMetrics;

impl MetricsRecorder for NoOpMetrics {
    fn record_solve(&self, _: usize, _: bool, _: Duration) {}
}

impl MetricsRecorder for Metrics {
    fn record_solve(&self, len: usize, parallel: bool, duration: Duration) {
        Metrics::record_solve(self, len, parallel, duration);
    }
}
