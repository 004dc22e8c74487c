//! The `OutputWriter` trait and writer construction.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use epi_core::DayTally;

use crate::{DelimitedWriter, OutputFormat, OutputResult, VerboseWriter};

/// Trait implemented by every tally writer.
///
/// Errors are returned here but stored by [`SimOutputObserver`], since
/// observer callbacks have no return value; retrieve them with
/// [`SimOutputObserver::take_error`].
///
/// [`SimOutputObserver`]: crate::SimOutputObserver
/// [`SimOutputObserver::take_error`]: crate::SimOutputObserver::take_error
pub trait OutputWriter {
    /// Write one line for `tally`.
    fn write_day(&mut self, tally: &DayTally) -> OutputResult<()>;

    /// Flush the underlying sink.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

impl<W: OutputWriter + ?Sized> OutputWriter for Box<W> {
    fn write_day(&mut self, tally: &DayTally) -> OutputResult<()> {
        (**self).write_day(tally)
    }

    fn finish(&mut self) -> OutputResult<()> {
        (**self).finish()
    }
}

/// A writer for `format` over any byte sink.
pub fn open_writer<W: Write + 'static>(format: OutputFormat, sink: W) -> Box<dyn OutputWriter> {
    match format.delimiter() {
        Some(delimiter) => Box::new(DelimitedWriter::new(sink, delimiter)),
        None            => Box::new(VerboseWriter::new(sink)),
    }
}

/// Create (or truncate) `path` and return a buffered writer for `format`.
pub fn create_file_writer(format: OutputFormat, path: &Path) -> OutputResult<Box<dyn OutputWriter>> {
    let file = BufWriter::new(File::create(path)?);
    Ok(open_writer(format, file))
}
