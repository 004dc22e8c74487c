//! `DiseaseParams` (caller-facing) and `Disease` (what the day loop reads).

use log::info;

use epi_core::error::{self, EpiResult};

use crate::rate::daily_probability;

// ── DiseaseParams ─────────────────────────────────────────────────────────────

/// Disease description as supplied by the caller.
///
/// `base_infection_rate` is cumulative over the whole simulation and
/// `mortality_rate` is cumulative over one illness; both are converted to
/// per-day probabilities by [`configure`](Self::configure).
/// `exposure_infection_rate` is already per contact per day.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiseaseParams {
    /// Probability of catching the disease spontaneously at some point
    /// during the run.
    pub base_infection_rate:     f64,
    /// Probability of infection on a day with at least one contagious
    /// acquaintance.
    pub exposure_infection_rate: f64,
    /// Probability of dying at some point during one illness.
    pub mortality_rate:          f64,
    /// Fraction of the population immune to contact transmission.
    pub immunity:                f64,
    /// Days an individual stays sick before recovering.
    pub illness_duration:        u32,
}

impl DiseaseParams {
    /// Validate every field and derive the daily probabilities against a
    /// run of `simulation_days` days.
    ///
    /// Fails on the first out-of-range field; no `Disease` is produced.
    pub fn configure(&self, simulation_days: u64) -> EpiResult<Disease> {
        error::probability("base_infection_rate", self.base_infection_rate)?;
        error::probability("exposure_infection_rate", self.exposure_infection_rate)?;
        error::probability("mortality_rate", self.mortality_rate)?;
        error::probability("immunity", self.immunity)?;
        error::positive("illness_duration", self.illness_duration)?;
        error::positive("simulation_days", simulation_days)?;

        let disease = Disease {
            daily_base_infection_probability: daily_probability(
                self.base_infection_rate,
                simulation_days,
            ),
            exposure_infection_probability:   self.exposure_infection_rate,
            daily_mortality_probability:      daily_probability(
                self.mortality_rate,
                self.illness_duration as u64,
            ),
            illness_duration:                 self.illness_duration,
            params:                           self.clone(),
        };
        info!(
            "creating disease with {} base infection rate, {} exposure infection rate, \
             {} mortality, {} natural immunity and {} days sickness length",
            self.base_infection_rate,
            self.exposure_infection_rate,
            self.mortality_rate,
            self.immunity,
            self.illness_duration,
        );
        info!(
            "daily probabilities: base infection {:.6}, mortality {:.6}",
            disease.daily_base_infection_probability, disease.daily_mortality_probability,
        );
        Ok(disease)
    }
}

// ── Disease ───────────────────────────────────────────────────────────────────

/// Validated disease with per-day probabilities.  Immutable once built.
///
/// Every probability lies in `[0, 1]` and `illness_duration >= 1`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Disease {
    daily_base_infection_probability: f64,
    exposure_infection_probability:   f64,
    daily_mortality_probability:      f64,
    illness_duration:                 u32,
    params:                           DiseaseParams,
}

impl Disease {
    /// Probability that any healthy individual catches the disease on a
    /// given day, independent of contacts.
    #[inline]
    pub fn daily_base_infection_probability(&self) -> f64 {
        self.daily_base_infection_probability
    }

    /// Probability of infection on a day with a contagious acquaintance.
    #[inline]
    pub fn exposure_infection_probability(&self) -> f64 {
        self.exposure_infection_probability
    }

    /// Probability that a sick individual dies on a given day.
    #[inline]
    pub fn daily_mortality_probability(&self) -> f64 {
        self.daily_mortality_probability
    }

    #[inline]
    pub fn illness_duration(&self) -> u32 {
        self.illness_duration
    }

    /// The cumulative parameters this disease was configured from.
    pub fn params(&self) -> &DiseaseParams {
        &self.params
    }
}

/// Configure a disease in one call.  See [`DiseaseParams::configure`].
pub fn configure_disease(
    base_infection_rate:     f64,
    exposure_infection_rate: f64,
    mortality_rate:          f64,
    immunity:                f64,
    illness_duration:        u32,
    simulation_days:         u64,
) -> EpiResult<Disease> {
    DiseaseParams {
        base_infection_rate,
        exposure_infection_rate,
        mortality_rate,
        immunity,
        illness_duration,
    }
    .configure(simulation_days)
}
