//! Simulation time model and run configuration.
//!
//! # Design
//!
//! Time advances in whole days.  `Day(0)` is the first simulated day; a run
//! of `days` days covers `Day(0)..Day(days)`.  There is no wall-clock mapping:
//! the model has no sub-day events, so an integer counter is all that is
//! needed.

use std::fmt;

use crate::error::{self, EpiResult};

/// Edge-acceptance attempts per unit of edge budget when none is configured.
pub const DEFAULT_RETRY_LIMIT: u32 = 5;

// ── Day ───────────────────────────────────────────────────────────────────────

/// An absolute simulated-day counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Day(pub u64);

impl Day {
    pub const ZERO: Day = Day(0);

    /// The day after `self`.
    #[inline]
    pub fn next(self) -> Day {
        Day(self.0 + 1)
    }

    /// Days elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Day) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Day {
    type Output = Day;
    #[inline]
    fn add(self, rhs: u64) -> Day {
        Day(self.0 + rhs)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Day {}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration: everything needed to build a population and
/// drive the day loop.  Disease rates live in `epi_disease::DiseaseParams`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of individuals.  Must be > 0.
    pub population_size: usize,

    /// Exclusive upper bound on each individual's drawn acquaintance target.
    /// Zero yields an edgeless population.
    pub connectivity: u32,

    /// Probability that an individual is immune to contact transmission.
    pub immunity: f64,

    /// Candidate draws per unit of edge budget before that unit is given up.
    pub retry_limit: u32,

    /// Total days to simulate.  Also the horizon over which the base
    /// infection rate is cumulative.
    pub days: u64,

    /// Master RNG seed.  The same seed always produces identical tallies.
    pub seed: u64,
}

impl SimConfig {
    /// Check every field against its documented range.
    pub fn validate(&self) -> EpiResult<()> {
        error::positive("population_size", self.population_size)?;
        if u32::try_from(self.population_size).is_err() {
            return Err(error::EpiError::invalid(
                "population_size",
                self.population_size,
                "at most u32::MAX individuals",
            ));
        }
        error::probability("immunity", self.immunity)?;
        error::positive("retry_limit", self.retry_limit)?;
        error::positive("days", self.days)?;
        Ok(())
    }

    /// The day at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_day(&self) -> Day {
        Day(self.days)
    }
}
