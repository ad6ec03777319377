//! Solver configuration and validation
//!
//! # Example
//!
//! ```
//! use maxsum_solver::SolverConfigBuilder;
//!
//! let config = SolverConfigBuilder::new()
//!     .parallel(true)
//!     .parallel_threshold(8192)
//!     .build()
//!     .expect("Valid config");
//! assert_eq!(config.parallel_threshold, 8192);
//! ```

use crate::domain::parallel::MIN_PARALLEL_THRESHOLD;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;

/// Default range length from which the halves are solved in parallel
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Solver configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Evaluate the two halves with rayon on large ranges
    pub parallel: bool,
    /// Minimum range length for a parallel split (>= 2)
    pub parallel_threshold: usize,
    /// Log filter used when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            log_level: "warn".to_string(),
        }
    }
}

impl SolverConfig {
    /// Sequential configuration, mostly for tests and benchmarks
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `MAXSUM_PARALLEL`: Enable parallel solving (default: true)
    /// - `MAXSUM_PARALLEL_THRESHOLD`: Minimum range length to split in parallel (default: 4096)
    /// - `MAXSUM_LOG_LEVEL`: Log level when `RUST_LOG` is unset (default: warn)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("MAXSUM_PARALLEL") {
            config.parallel = parse_bool(&value).ok_or(ConfigError::InvalidEnv {
                var: "MAXSUM_PARALLEL",
                value,
            })?;
        }

        if let Some(value) = lookup("MAXSUM_PARALLEL_THRESHOLD") {
            config.parallel_threshold =
                value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                    var: "MAXSUM_PARALLEL_THRESHOLD",
                    value,
                })?;
        }

        if let Some(value) = lookup("MAXSUM_LOG_LEVEL") {
            config.log_level = value.trim().to_string();
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.parallel_threshold < MIN_PARALLEL_THRESHOLD {
            return Err(ConfigError::InvalidParameter {
                name: "parallel_threshold",
                value: self.parallel_threshold.to_string(),
                reason: "must be at least 2",
            });
        }

        if self.log_level.trim().is_empty() {
            return Err(ConfigError::InvalidParameter {
                name: "log_level",
                value: self.log_level.clone(),
                reason: "must not be empty",
            });
        }

        Ok(())
    }

    /// Whether a range of `len` elements is split in parallel
    pub fn splits_in_parallel(&self, len: usize) -> bool {
        self.parallel && len >= self.parallel_threshold
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Builder for SolverConfig with validation
#[derive(Default)]
pub struct SolverConfigBuilder {
    parallel: Option<bool>,
    parallel_threshold: Option<usize>,
    log_level: Option<String>,
}

impl SolverConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = Some(enabled);
        self
    }

    pub fn parallel_threshold(mut self, len: usize) -> Self {
        self.parallel_threshold = Some(len);
        self
    }

    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Build the SolverConfig, validating all parameters
    pub fn build(self) -> Result<SolverConfig, ConfigError> {
        let config = self.build_unchecked();
        config.validate()?;
        Ok(config)
    }

    /// Build without validation
    pub fn build_unchecked(self) -> SolverConfig {
        let defaults = SolverConfig::default();

        SolverConfig {
            parallel: self.parallel.unwrap_or(defaults.parallel),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(defaults.parallel_threshold),
            log_level: self.log_level.unwrap_or(defaults.log_level),
        }
    }
}
