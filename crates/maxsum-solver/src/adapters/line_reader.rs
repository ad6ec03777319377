//! Newline-delimited integer reader

use std::io::BufRead;

use tracing::trace;

use crate::error::InputError;
use crate::ports::SequenceSource;

/// Reads one integer per line until end of stream.
///
/// Surrounding whitespace on each line is ignored (so `\r\n` endings work).
/// Blank lines and anything `i64::from_str` rejects are errors; nothing is
/// skipped silently.
pub struct LineSequenceReader<R> {
    inner: R,
}

impl<R: BufRead> LineSequenceReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: BufRead> SequenceSource for LineSequenceReader<R> {
    fn read_sequence(&mut self) -> Result<Vec<i64>, InputError> {
        let mut sequence = Vec::new();
        for (index, line) in (&mut self.inner).lines().enumerate() {
            sequence.push(parse_line(index + 1, &line?)?);
        }
        trace!(len = sequence.len(), "Read integer sequence");
        Ok(sequence)
    }
}

/// Parse a single input line; `line_number` is 1-based and only used for errors.
pub fn parse_line(line_number: usize, text: &str) -> Result<i64, InputError> {
    text.trim().parse().map_err(|source| InputError::Parse {
        line: line_number,
        text: text.to_string(),
        source,
    })
}
