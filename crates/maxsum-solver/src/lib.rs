//! # maxsum-solver
//!
//! Maximum contiguous subarray solver using divide-and-conquer.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure algorithm, no I/O
//!   - `SubarrayResult`: `(sum, begin, end)` over a half-open range
//!   - `solver`: recursive split / crossing scan / combine
//!   - `parallel`: same recursion with `rayon::join` on large ranges
//!   - `reference`: quadratic oracle used by tests and benchmarks
//!   - `SolverConfig` / `SolverConfigBuilder`: validated configuration
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `MaxSubarrayApi`: Driving port (inbound API)
//!   - `SequenceSource` / `ResultSink`: Driven ports (text I/O)
//!
//! - **Service Layer** (`service/`): Orchestration
//!   - `MaxSubarrayService`: Implements `MaxSubarrayApi`
//!
//! - **Adapters Layer** (`adapters/`): Line-oriented text reader and writer
//!
//! ## Invariants
//!
//! - **SUM**: `result.sum == v[result.begin..result.end].iter().sum()`
//! - **RANGE**: `0 <= begin <= end <= v.len()`
//! - **TIES**: a candidate replaces the current best only when strictly
//!   greater; candidates are considered left, right, crossing.
//!
//! ## Usage Example
//!
//! ```
//! use maxsum_solver::{solve, SubarrayResult};
//!
//! let result = solve(&[1, -2, 3, -1, 2]);
//! assert_eq!(result, SubarrayResult::new(4, 2, 5));
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use adapters::{LineResultWriter, LineSequenceReader};
pub use domain::{
    recursion_depth, solve, solve_parallel, SolverConfig, SolverConfigBuilder, SubarrayResult,
    DEFAULT_PARALLEL_THRESHOLD,
};
pub use error::{ConfigError, InputError, OutputError, RunError};
pub use metrics::{Metrics, MetricsRecorder, MetricsSnapshot, NoOpMetrics};
pub use ports::{MaxSubarrayApi, ResultSink, SequenceSource};
pub use service::MaxSubarrayService;
