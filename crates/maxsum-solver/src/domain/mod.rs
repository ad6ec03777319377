//! Domain Layer - Pure algorithm
//!
//! This layer contains:
//! - The subarray result type
//! - The divide-and-conquer solver (sequential and rayon-parallel)
//! - A quadratic reference solver
//! - Configuration
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - The input sequence is only ever borrowed

pub mod config;
pub mod parallel;
pub mod reference;
pub mod result;
pub mod solver;

pub use config::{SolverConfig, SolverConfigBuilder, DEFAULT_PARALLEL_THRESHOLD};
pub use parallel::solve_parallel;
pub use reference::brute_force;
pub use result::SubarrayResult;
pub use solver::{
    base_case, combine, max_crossing, midpoint, recursion_depth, solve, solve_range,
};
