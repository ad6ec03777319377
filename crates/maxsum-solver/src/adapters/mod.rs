//! Adapters Layer
//!
//! Text implementations of the outbound ports:
//!
//! - `LineSequenceReader`: one decimal integer per line from any `BufRead`
//! - `LineResultWriter`: sum, begin and end on three lines to any `Write`

pub mod line_reader;
pub mod line_writer;

pub use line_reader::{parse_line, LineSequenceReader};
pub use line_writer::{format_result, LineResultWriter};
