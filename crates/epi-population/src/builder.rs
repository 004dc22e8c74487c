//! Random acquaintance-graph construction.
//!
//! # Algorithm
//!
//! 1. Every individual draws an edge budget uniformly from `0..connectivity`
//!    and, independently, becomes immune with probability `immunity`.
//! 2. Individuals are visited once, in id order.  While individual `i` has
//!    budget left, up to `retry_limit` candidates `j` are drawn uniformly
//!    from the whole population.  A candidate is accepted if `j != i`, `j`
//!    still has budget, and `{i, j}` is not already an edge.  An accepted
//!    edge consumes one unit of `j`'s budget immediately.
//! 3. Whether or not a candidate was accepted, `i`'s budget drops by exactly
//!    one.  Each individual therefore costs at most
//!    `initial_budget × retry_limit` draws, and construction always
//!    terminates even when almost no eligible candidates remain.
//!
//! The realised degree is shaped by budget contention and is generally lower
//! than the drawn target.  Budgets given up after `retry_limit` misses are
//! counted in [`BuildStats::exhausted_slots`]; this is not an error.

use log::{debug, info};

use epi_core::error::{self, EpiResult};
use epi_core::{PersonId, SimConfig, SimRng, DEFAULT_RETRY_LIMIT};

use crate::PopulationGraph;

/// Counters collected while building the graph.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Sum of the initial edge budgets.
    pub budget_total:    u64,
    /// Edges actually created.
    pub edges_created:   u64,
    /// Budget units abandoned after `retry_limit` rejected candidates.
    pub exhausted_slots: u64,
    /// Total candidate draws.
    pub candidate_draws: u64,
}

/// Fluent builder for a random [`PopulationGraph`].
///
/// # Example
///
/// ```rust
/// use epi_core::SimRng;
/// use epi_population::PopulationBuilder;
///
/// let mut rng = SimRng::new(42);
/// let (graph, stats) = PopulationBuilder::new(1_000, 10)
///     .immunity(0.02)
///     .retry_limit(5)
///     .build(&mut rng)
///     .unwrap();
///
/// assert_eq!(graph.len(), 1_000);
/// assert_eq!(graph.edge_count() as u64, stats.edges_created);
/// ```
#[derive(Clone, Debug)]
pub struct PopulationBuilder {
    size:         usize,
    connectivity: u32,
    immunity:     f64,
    retry_limit:  u32,
}

impl PopulationBuilder {
    /// A builder for `size` individuals whose edge targets are drawn from
    /// `0..connectivity`.  No immunity, default retry limit.
    pub fn new(size: usize, connectivity: u32) -> Self {
        Self {
            size,
            connectivity,
            immunity:    0.0,
            retry_limit: DEFAULT_RETRY_LIMIT,
        }
    }

    /// Builder pre-filled from a run configuration.
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.population_size, config.connectivity)
            .immunity(config.immunity)
            .retry_limit(config.retry_limit)
    }

    /// Probability that each individual is immune to contact transmission.
    pub fn immunity(mut self, fraction: f64) -> Self {
        self.immunity = fraction;
        self
    }

    /// Candidate draws per unit of edge budget.
    pub fn retry_limit(mut self, limit: u32) -> Self {
        self.retry_limit = limit;
        self
    }

    fn validate(&self) -> EpiResult<()> {
        error::positive("population_size", self.size)?;
        if u32::try_from(self.size).is_err() {
            return Err(error::EpiError::invalid(
                "population_size",
                self.size,
                "at most u32::MAX individuals",
            ));
        }
        error::probability("immunity", self.immunity)?;
        error::positive("retry_limit", self.retry_limit)?;
        Ok(())
    }

    /// Validate the parameters and construct the graph, drawing all
    /// randomness from `rng`.
    pub fn build(self, rng: &mut SimRng) -> EpiResult<(PopulationGraph, BuildStats)> {
        self.validate()?;
        info!(
            "building population of size {} with connectivity {} and natural immunity {}",
            self.size, self.connectivity, self.immunity
        );

        // ── Step 1: budgets and immunity ──────────────────────────────────
        let mut budget: Vec<u32> = Vec::with_capacity(self.size);
        let mut immune: Vec<bool> = Vec::with_capacity(self.size);
        for _ in 0..self.size {
            let target = if self.connectivity == 0 {
                0
            } else {
                rng.gen_range(0..self.connectivity)
            };
            budget.push(target);
            immune.push(rng.gen_bool(self.immunity));
        }

        let mut stats = BuildStats {
            budget_total: budget.iter().map(|&b| b as u64).sum(),
            ..BuildStats::default()
        };

        // ── Step 2: single pass of edge assignment ────────────────────────
        let mut graph = PopulationGraph::edgeless(immune);
        let n = self.size as u32;
        for i in 0..n {
            let me = PersonId(i);
            while budget[me.index()] > 0 {
                let mut accepted = false;
                for _ in 0..self.retry_limit {
                    stats.candidate_draws += 1;
                    let other = PersonId(rng.gen_range(0..n));
                    if other != me
                        && budget[other.index()] > 0
                        && !graph.are_connected(me, other)
                    {
                        graph.connect(me, other);
                        budget[other.index()] -= 1;
                        stats.edges_created += 1;
                        accepted = true;
                        break;
                    }
                }
                if !accepted {
                    stats.exhausted_slots += 1;
                }
                // Consumed whether or not an edge was made.
                budget[me.index()] -= 1;
            }
        }

        debug!(
            "population built: {} edges, mean degree {:.3}, {} immune, {} budget units exhausted",
            graph.edge_count(),
            graph.mean_degree(),
            graph.immune_count(),
            stats.exhausted_slots,
        );
        Ok((graph, stats))
    }
}

/// Build a random population in one call.
///
/// Equivalent to `PopulationBuilder::new(size, connectivity)
/// .immunity(immunity).retry_limit(retry_limit).build(rng)`, discarding
/// the statistics.
pub fn build_population(
    size:         usize,
    connectivity: u32,
    immunity:     f64,
    retry_limit:  u32,
    rng:          &mut SimRng,
) -> EpiResult<PopulationGraph> {
    PopulationBuilder::new(size, connectivity)
        .immunity(immunity)
        .retry_limit(retry_limit)
        .build(rng)
        .map(|(graph, _)| graph)
}
