//! Fluent builder for constructing a [`Sim`].

use log::info;

use epi_core::{SimConfig, SimRng};
use epi_disease::DiseaseParams;
use epi_population::{PersonRngs, PopulationBuilder, PopulationGraph};

use crate::{EpidemicEngine, Sim, SimError, SimResult};

/// Seed offset of the graph-construction stream.
const GRAPH_STREAM: u64 = 1;

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — population size, connectivity, days, seed, …
/// - [`DiseaseParams`] — cumulative rates and illness duration
///
/// # Optional inputs
///
/// | Method            | Default                                          |
/// |-------------------|--------------------------------------------------|
/// | `.population(g)`  | Random graph built from `config` and its seed    |
///
/// # Seeding
///
/// One root `SimRng` is seeded from `config.seed`.  The graph is built from a
/// child stream of it and the per-person engine RNGs from a seed drawn after
/// that, so supplying a prebuilt population does not shift the engine's
/// randomness.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, params).build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:     SimConfig,
    disease:    DiseaseParams,
    population: Option<PopulationGraph>,
}

impl SimBuilder {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, disease: DiseaseParams) -> Self {
        Self {
            config,
            disease,
            population: None,
        }
    }

    /// Use a prebuilt population instead of generating one.
    ///
    /// Must have exactly `config.population_size` individuals.  The config's
    /// `connectivity`, `immunity`, and `retry_limit` are then ignored.
    pub fn population(mut self, population: PopulationGraph) -> Self {
        self.population = Some(population);
        self
    }

    /// Validate inputs, build the population and disease, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        let disease = self.disease.configure(self.config.days)?;

        let mut root = SimRng::new(self.config.seed);
        let mut graph_rng = root.child(GRAPH_STREAM);
        let engine_seed: u64 = root.random();

        let (population, build_stats) = match self.population {
            Some(p) => {
                if p.len() != self.config.population_size {
                    return Err(SimError::PopulationMismatch {
                        expected: self.config.population_size,
                        got:      p.len(),
                        what:     "supplied population",
                    });
                }
                (p, None)
            }
            None => {
                if self.disease.immunity != self.config.immunity {
                    return Err(SimError::Config(format!(
                        "disease immunity {} differs from population immunity {}",
                        self.disease.immunity, self.config.immunity
                    )));
                }
                let (graph, stats) =
                    PopulationBuilder::from_config(&self.config).build(&mut graph_rng)?;
                (graph, Some(stats))
            }
        };

        let rngs = PersonRngs::new(population.len(), engine_seed);
        let engine = EpidemicEngine::new(disease, rngs);
        info!(
            "simulation ready: {} individuals, {} edges, {} days, seed {}",
            population.len(),
            population.edge_count(),
            self.config.days,
            self.config.seed,
        );

        Ok(Sim {
            config: self.config,
            population,
            engine,
            build_stats,
        })
    }
}
