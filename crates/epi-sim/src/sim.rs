//! The `Sim` struct and its day loop.

use epi_core::{Day, SimConfig};
use epi_population::{BuildStats, PopulationGraph};

use crate::{EpidemicEngine, SimObserver, SimResult};

/// The main simulation runner.
///
/// Holds the population and the engine and advances both one day at a time,
/// reporting each day's tally to a [`SimObserver`].
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Run configuration (population size, days, seed, …).
    pub config: SimConfig,

    /// The population.  Topology is fixed; health records change daily.
    pub population: PopulationGraph,

    /// Disease, per-person RNGs, and the day counter.
    pub engine: EpidemicEngine,

    /// Construction counters; `None` when a prebuilt population was supplied.
    pub build_stats: Option<BuildStats>,
}

impl Sim {
    /// The next day to be simulated.
    #[inline]
    pub fn current_day(&self) -> Day {
        self.engine.day()
    }

    /// Run from the current day to `config.end_day()`.
    ///
    /// Stops at the first day that cannot be simulated (the population was
    /// replaced with one of a different size); `on_sim_end` is then not
    /// called.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.current_day() < self.config.end_day() {
            self.step(observer)?;
        }
        observer.on_sim_end(self.current_day());
        Ok(())
    }

    /// Run exactly `n` days from the current position (ignores `end_day`).
    ///
    /// Useful for tests and incremental stepping.  Does not call
    /// `on_sim_end`.
    pub fn run_days<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        observer.on_day_start(self.current_day());
        let tally = self.engine.run_day(&mut self.population)?;
        observer.on_day_end(&tally);
        Ok(())
    }
}
