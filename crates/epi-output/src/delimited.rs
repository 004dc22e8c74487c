//! CSV / TSV backend.

use std::io::Write;

use csv::{Writer, WriterBuilder};

use epi_core::DayTally;

use crate::OutputResult;
use crate::writer::OutputWriter;

/// Writes one `day, sick, dead, healthy` record per day with the given
/// delimiter.  No header row.
pub struct DelimitedWriter<W: Write> {
    inner:    Writer<W>,
    finished: bool,
}

impl<W: Write> DelimitedWriter<W> {
    pub fn new(sink: W, delimiter: u8) -> Self {
        let inner = WriterBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .from_writer(sink);
        Self { inner, finished: false }
    }

    /// Comma-separated.
    pub fn csv(sink: W) -> Self {
        Self::new(sink, b',')
    }

    /// Tab-separated.
    pub fn tsv(sink: W) -> Self {
        Self::new(sink, b'\t')
    }

    /// Flush and return the underlying sink.
    pub fn into_inner(self) -> OutputResult<W> {
        self.inner
            .into_inner()
            .map_err(|e| std::io::Error::other(e.to_string()).into())
    }
}

impl<W: Write> OutputWriter for DelimitedWriter<W> {
    fn write_day(&mut self, tally: &DayTally) -> OutputResult<()> {
        self.inner.write_record(&[
            tally.day.0.to_string(),
            tally.sick.to_string(),
            tally.dead.to_string(),
            tally.healthy.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.inner.flush()?;
        Ok(())
    }
}
