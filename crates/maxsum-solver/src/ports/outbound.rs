//! Outbound Ports (Driven Ports)
//!
//! The solver never touches I/O itself; a caller wires a source and a sink
//! around it.

use crate::domain::SubarrayResult;
use crate::error::{InputError, OutputError};

/// Supplies the integer sequence to solve
pub trait SequenceSource {
    /// Read the whole sequence. An exhausted source yields an empty sequence.
    fn read_sequence(&mut self) -> Result<Vec<i64>, InputError>;
}

/// Receives the solver's answer
pub trait ResultSink {
    fn write_result(&mut self, result: &SubarrayResult) -> Result<(), OutputError>;
}
