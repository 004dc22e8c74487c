//! Simulation observer trait for progress reporting and data collection.

use epi_core::{Day, DayTally};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// day loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_day_end(&mut self, tally: &DayTally) {
///         println!("{tally}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the start of each day, before any transitions.
    fn on_day_start(&mut self, _day: Day) {}

    /// Called once every individual has been stepped and counted.
    fn on_day_end(&mut self, _tally: &DayTally) {}

    /// Called once after the final day completes.  `final_day` is the
    /// exclusive end of the simulated range.
    fn on_sim_end(&mut self, _final_day: Day) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// A [`SimObserver`] that keeps every day's tally in memory.
#[derive(Debug, Default, Clone)]
pub struct TallyRecorder {
    pub tallies:  Vec<DayTally>,
    pub finished: bool,
}

impl SimObserver for TallyRecorder {
    fn on_day_end(&mut self, tally: &DayTally) {
        self.tallies.push(*tally);
    }

    fn on_sim_end(&mut self, _final_day: Day) {
        self.finished = true;
    }
}
