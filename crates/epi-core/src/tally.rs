//! Aggregate per-day counts.

use std::fmt;

use crate::{Day, HealthState};

/// Number of individuals in each health state at the end of one day.
///
/// Produced by a single scan over the population; the three counts always
/// sum to the population size.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayTally {
    pub day:     Day,
    pub healthy: usize,
    pub sick:    usize,
    pub dead:    usize,
}

impl DayTally {
    /// Count `states` for `day`.
    pub fn from_states<I>(day: Day, states: I) -> Self
    where
        I: IntoIterator<Item = HealthState>,
    {
        let mut tally = DayTally { day, ..Default::default() };
        for state in states {
            tally.record(state);
        }
        tally
    }

    #[inline]
    pub fn record(&mut self, state: HealthState) {
        match state {
            HealthState::Healthy => self.healthy += 1,
            HealthState::Sick    => self.sick += 1,
            HealthState::Dead    => self.dead += 1,
        }
    }

    /// Total individuals counted.
    #[inline]
    pub fn total(&self) -> usize {
        self.healthy + self.sick + self.dead
    }
}

impl fmt::Display for DayTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} healthy, {} sick, {} dead",
            self.day, self.healthy, self.sick, self.dead
        )
    }
}
