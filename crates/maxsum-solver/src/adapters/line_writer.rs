//! Three-line result writer

use std::io::Write;

use crate::domain::SubarrayResult;
use crate::error::OutputError;
use crate::ports::ResultSink;

/// Writes the sum, the inclusive begin index and the exclusive end index,
/// one per line, then flushes.
pub struct LineResultWriter<W> {
    inner: W,
}

impl<W: Write> LineResultWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> ResultSink for LineResultWriter<W> {
    fn write_result(&mut self, result: &SubarrayResult) -> Result<(), OutputError> {
        self.inner.write_all(format_result(result).as_bytes())?;
        self.inner.flush()?;
        Ok(())
    }
}

/// Text form written by `LineResultWriter`
pub fn format_result(result: &SubarrayResult) -> String {
    format!("{}\n{}\n{}\n", result.sum, result.begin, result.end)
}
