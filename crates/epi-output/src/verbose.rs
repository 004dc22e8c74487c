//! Human-readable backend.

use std::io::Write;

use epi_core::DayTally;

use crate::OutputResult;
use crate::writer::OutputWriter;

/// Writes `Day {d}: {sick} sick, {dead} dead, {healthy} healthy` per day.
pub struct VerboseWriter<W: Write> {
    sink:     W,
    finished: bool,
}

impl<W: Write> VerboseWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink, finished: false }
    }

    /// Return the underlying sink.
    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W: Write> OutputWriter for VerboseWriter<W> {
    fn write_day(&mut self, tally: &DayTally) -> OutputResult<()> {
        writeln!(
            self.sink,
            "Day {}: {} sick, {} dead, {} healthy",
            tally.day.0, tally.sick, tally.dead, tally.healthy
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.sink.flush()?;
        Ok(())
    }
}
