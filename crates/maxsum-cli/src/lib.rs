//! # maxsum CLI
//!
//! Wiring for the `maxsum` binary: stdin reader → solver service → stdout
//! writer, with tracing on stderr.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration from the environment
//! 2. Initialize tracing (stderr only, stdout carries the answer)
//! 3. Read the sequence, solve, print three lines
//! 4. Log the metrics snapshot

use std::io::{BufRead, Write};
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use maxsum_solver::{
    LineResultWriter, LineSequenceReader, MaxSubarrayService, Metrics, RunError, SolverConfig,
    SubarrayResult,
};

/// Install the global fmt subscriber writing to stderr.
///
/// `RUST_LOG` wins over `config.log_level`.
pub fn init_tracing(config: &SolverConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .with_context(|| format!("invalid log filter {:?}", config.log_level))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!(e))
        .context("failed to install tracing subscriber")
}

/// Read from `input`, solve with `config`, write the three result lines to `output`.
pub fn run<R, W>(config: SolverConfig, input: R, output: W) -> Result<SubarrayResult>
where
    R: BufRead,
    W: Write,
{
    let metrics = Arc::new(Metrics::new());
    let service = MaxSubarrayService::with_metrics(config, metrics.clone())
        .context("invalid solver configuration")?;

    let mut source = LineSequenceReader::new(input);
    let mut sink = LineResultWriter::new(output);

    let result = service
        .run(&mut source, &mut sink)
        .map_err(|e| match e {
            RunError::Input(e) => anyhow!(e).context("failed to read integer sequence"),
            RunError::Output(e) => anyhow!(e).context("failed to write result"),
        })?;

    let snapshot = metrics.snapshot();
    debug!(
        metrics = %serde_json::to_string(&snapshot).unwrap_or_default(),
        "Solver metrics"
    );

    Ok(result)
}
