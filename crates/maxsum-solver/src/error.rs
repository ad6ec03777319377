//! Error types for the solver's outer layers
//!
//! The domain solver is total and has no error type. Failures only come
//! from configuration and from the text adapters.

use std::num::ParseIntError;
use thiserror::Error;

/// Errors raised while building or loading a `SolverConfig`
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("Environment variable {var} has unparseable value {value:?}")]
    InvalidEnv { var: &'static str, value: String },
}

/// Errors from reading an integer sequence
#[derive(Debug, Error)]
pub enum InputError {
    #[error("I/O error while reading input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Line {line}: {text:?} is not a valid integer")]
    Parse {
        line: usize,
        text: String,
        #[source]
        source: ParseIntError,
    },
}

/// Errors from writing a result
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error while writing result: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure of a full read, solve, write run
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Output(#[from] OutputError),
}
