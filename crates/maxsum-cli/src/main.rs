//! `maxsum`: maximum contiguous subarray of the integers on stdin.
//!
//! Input: one integer per line until end of stream.
//! Output: the maximum sum, the inclusive begin index and the exclusive end
//! index, each on its own line.

use std::io;

use anyhow::{Context, Result};
use tracing::info;

use maxsum_cli::{init_tracing, run};
use maxsum_solver::SolverConfig;

fn main() -> Result<()> {
    let config = SolverConfig::from_env().context("failed to load configuration")?;
    init_tracing(&config)?;

    info!(
        parallel = config.parallel,
        parallel_threshold = config.parallel_threshold,
        "Starting maxsum"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(config, stdin.lock(), stdout.lock())?;

    Ok(())
}
