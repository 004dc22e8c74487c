//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use epi_core::{Day, DayTally};
use epi_sim::SimObserver;

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes each day's tally to any [`OutputWriter`].
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].  After the first error no further lines
/// are written.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    days:       usize,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            days:       0,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Number of day lines written successfully.
    pub fn days_written(&self) -> usize {
        self.days
    }

    /// Unwrap the inner writer (e.g. to inspect output after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_day_end(&mut self, tally: &DayTally) {
        if self.last_error.is_some() {
            return;
        }
        let result = self.writer.write_day(tally);
        if result.is_ok() {
            self.days += 1;
        }
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_day: Day) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
