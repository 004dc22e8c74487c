//! Per-individual epidemiological state.

use std::fmt;

/// Health of one individual.  `Dead` is terminal.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HealthState {
    #[default]
    Healthy,
    Sick,
    Dead,
}

impl fmt::Display for HealthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HealthState::Healthy => "healthy",
            HealthState::Sick    => "sick",
            HealthState::Dead    => "dead",
        };
        f.write_str(s)
    }
}

/// The mutable half of an individual: health state plus the sick-day counter.
///
/// Kept `Copy` and small so a full day's worth can be double-buffered as a
/// plain `Vec<HealthRecord>`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealthRecord {
    pub state: HealthState,
    /// Completed days in the `Sick` state.  Only meaningful while sick;
    /// zero on infection and on recovery.
    pub days_sick: u32,
}

impl HealthRecord {
    pub const HEALTHY: HealthRecord = HealthRecord { state: HealthState::Healthy, days_sick: 0 };

    /// A freshly infected record (`days_sick == 0`).
    pub const INFECTED: HealthRecord = HealthRecord { state: HealthState::Sick, days_sick: 0 };

    pub const DEAD: HealthRecord = HealthRecord { state: HealthState::Dead, days_sick: 0 };

    #[inline]
    pub fn is_healthy(self) -> bool {
        self.state == HealthState::Healthy
    }

    #[inline]
    pub fn is_sick(self) -> bool {
        self.state == HealthState::Sick
    }

    #[inline]
    pub fn is_dead(self) -> bool {
        self.state == HealthState::Dead
    }

    /// Sick and has survived at least one full day in that state.
    ///
    /// Someone infected today (`days_sick == 0`) cannot pass the disease on
    /// until tomorrow.
    #[inline]
    pub fn is_contagious(self) -> bool {
        self.is_sick() && self.days_sick > 0
    }
}
