//! `epi-population` — the acquaintance graph for the `rust_epi` simulator.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`graph`]       | `PopulationGraph` (topology + health records), `Individual` |
//! | [`builder`]     | `PopulationBuilder` (retry-bounded random construction)   |
//! | [`rngs`]        | `PersonRngs` (per-individual RNG for the day loop)        |
//!
//! Topology is fixed once construction returns.  The only thing that changes
//! afterwards is the `HealthRecord` vector, replaced wholesale once per day.

pub mod builder;
pub mod graph;
pub mod rngs;

#[cfg(test)]
mod tests;

pub use builder::{build_population, BuildStats, PopulationBuilder};
pub use graph::{Individual, PopulationGraph};
pub use rngs::PersonRngs;
