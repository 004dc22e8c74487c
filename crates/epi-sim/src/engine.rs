//! Per-individual day transitions and the double-buffered day step.
//!
//! # Snapshot contract
//!
//! Every transition for day `t` is computed from the records as they stood
//! at the end of day `t − 1`.  [`step_day`] only ever reads
//! `graph.health()`, which is not replaced until every individual has been
//! stepped, so no individual can observe a neighbor that has already
//! advanced to today, and the parallel path gives the same result.
//!
//! # Immunity
//!
//! Immunity blocks contact transmission only.  An immune individual still
//! takes the daily base-infection draw and can fall sick from it.

use log::debug;

use epi_core::{Day, DayTally, HealthRecord, HealthState, PersonId, PersonRng};
use epi_disease::Disease;
use epi_population::{PersonRngs, PopulationGraph};

use crate::{SimError, SimResult};

// ── Transitions ───────────────────────────────────────────────────────────────

/// Decide whether a healthy `person` becomes infected today.
///
/// 1. One draw against the daily base-infection probability.
/// 2. On a miss, if `person` is not immune, scan its neighbors in adjacency
///    order and stop at the first contagious one (sick for at least one full
///    day).  If one is found, one draw against the exposure probability.
///
/// At most two draws are taken from `rng`.
pub fn expose(
    person:  PersonId,
    graph:   &PopulationGraph,
    disease: &Disease,
    rng:     &mut PersonRng,
) -> bool {
    if rng.gen_bool(disease.daily_base_infection_probability()) {
        return true;
    }
    if graph.is_immune(person) {
        return false;
    }
    let health = graph.health();
    let has_contagious_contact = graph
        .neighbors(person)
        .iter()
        .any(|n| health[n.index()].is_contagious());
    has_contagious_contact && rng.gen_bool(disease.exposure_infection_probability())
}

/// Compute `person`'s record for today from yesterday's records in `graph`.
///
/// Precedence for a sick individual: mortality first, then recovery, then
/// another sick day.  `days_sick` counts completed sick days, so an
/// individual infected on day `t` recovers on day `t + illness_duration`
/// having taken exactly `illness_duration` mortality draws.
pub fn step_day(
    person:  PersonId,
    graph:   &PopulationGraph,
    disease: &Disease,
    rng:     &mut PersonRng,
) -> HealthRecord {
    let yesterday = graph.health()[person.index()];
    match yesterday.state {
        HealthState::Dead => yesterday,
        HealthState::Sick => {
            if rng.gen_bool(disease.daily_mortality_probability()) {
                HealthRecord::DEAD
            } else if yesterday.days_sick + 1 >= disease.illness_duration() {
                HealthRecord::HEALTHY
            } else {
                HealthRecord {
                    state:     HealthState::Sick,
                    days_sick: yesterday.days_sick + 1,
                }
            }
        }
        HealthState::Healthy => {
            if expose(person, graph, disease, rng) {
                HealthRecord::INFECTED
            } else {
                yesterday
            }
        }
    }
}

/// Count the current health states of `graph` in one pass.
pub fn tally(day: Day, graph: &PopulationGraph) -> DayTally {
    DayTally::from_states(day, graph.health().iter().map(|r| r.state))
}

/// Advance every individual by one day and return the end-of-day tally.
///
/// Writes into `scratch` (cleared first) and swaps it with the graph's
/// records; on return `scratch` holds yesterday's records and can be reused.
/// The graph is left untouched if `rngs` is not one RNG per individual.
fn advance(
    day:     Day,
    graph:   &mut PopulationGraph,
    disease: &Disease,
    rngs:    &mut PersonRngs,
    scratch: &mut Vec<HealthRecord>,
) -> SimResult<DayTally> {
    if rngs.len() != graph.len() {
        return Err(SimError::PopulationMismatch {
            expected: graph.len(),
            got:      rngs.len(),
            what:     "per-person RNG state",
        });
    }
    scratch.clear();

    {
        let graph: &PopulationGraph = graph;

        #[cfg(not(feature = "parallel"))]
        scratch.extend(
            rngs.inner
                .iter_mut()
                .enumerate()
                .map(|(i, rng)| step_day(PersonId(i as u32), graph, disease, rng)),
        );

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            scratch.par_extend(
                rngs.inner
                    .par_iter_mut()
                    .enumerate()
                    .map(|(i, rng)| step_day(PersonId(i as u32), graph, disease, rng)),
            );
        }
    }

    let yesterday = graph.replace_health(std::mem::take(scratch))?;
    *scratch = yesterday;

    let counts = tally(day, graph);
    debug!("{counts}");
    Ok(counts)
}

/// Advance the whole population by one day.
///
/// Fails with [`SimError::PopulationMismatch`] unless `rngs` holds one RNG
/// per individual.  Allocates a fresh write buffer;
/// [`EpidemicEngine::run_day`] reuses one across days instead.
pub fn run_day(
    day:     Day,
    graph:   &mut PopulationGraph,
    disease: &Disease,
    rngs:    &mut PersonRngs,
) -> SimResult<DayTally> {
    let mut scratch = Vec::with_capacity(graph.len());
    advance(day, graph, disease, rngs, &mut scratch)
}

// ── EpidemicEngine ────────────────────────────────────────────────────────────

/// Owns the disease, the per-person RNGs, and the day counter, and applies
/// one day of transitions per [`run_day`](Self::run_day) call.
///
/// The engine never touches graph topology, only the health records.
pub struct EpidemicEngine {
    disease: Disease,
    rngs:    PersonRngs,
    day:     Day,
    scratch: Vec<HealthRecord>,
}

impl EpidemicEngine {
    /// Create an engine starting at `Day(0)`.
    pub fn new(disease: Disease, rngs: PersonRngs) -> Self {
        let scratch = Vec::with_capacity(rngs.len());
        Self {
            disease,
            rngs,
            day: Day::ZERO,
            scratch,
        }
    }

    pub fn disease(&self) -> &Disease {
        &self.disease
    }

    /// The day the next `run_day` call will simulate.
    pub fn day(&self) -> Day {
        self.day
    }

    /// Number of individuals this engine holds RNG state for.
    pub fn population_size(&self) -> usize {
        self.rngs.len()
    }

    /// Simulate one day on `graph` and return its tally.
    ///
    /// A `graph` of a different size than the engine was created for is
    /// rejected with [`SimError::PopulationMismatch`]; neither the graph nor
    /// the day counter changes.
    pub fn run_day(&mut self, graph: &mut PopulationGraph) -> SimResult<DayTally> {
        let counts = advance(self.day, graph, &self.disease, &mut self.rngs, &mut self.scratch)?;
        self.day = self.day.next();
        Ok(counts)
    }
}
