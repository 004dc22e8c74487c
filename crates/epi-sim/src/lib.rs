//! `epi-sim` — the epidemic engine and day loop for the rust_epi simulator.
//!
//! # Day step
//!
//! ```text
//! for day in 0..config.days:
//!   for every individual, reading yesterday's records only:
//!     SICK     → mortality draw; on a hit      → DEAD
//!              → else illness complete          → HEALTHY (days_sick = 0)
//!              → else                           → days_sick += 1
//!     HEALTHY  → base draw; on a miss and not immune, first contagious
//!                neighbor → exposure draw; any hit → SICK (days_sick = 0)
//!     DEAD     → unchanged
//!   swap in the new records, tally, notify the observer
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the per-person step on Rayon's thread pool.       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use epi_core::SimConfig;
//! use epi_disease::DiseaseParams;
//! use epi_sim::{SimBuilder, TallyRecorder};
//!
//! let mut sim = SimBuilder::new(config, params).build()?;
//! let mut recorder = TallyRecorder::default();
//! sim.run(&mut recorder)?;
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use engine::{expose, run_day, step_day, tally, EpidemicEngine};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TallyRecorder};
pub use sim::Sim;
