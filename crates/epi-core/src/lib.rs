//! `epi-core` — foundational types for the `rust_epi` network epidemic simulator.
//!
//! This crate is a dependency of every other `epi-*` crate.  It has no
//! `epi-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `PersonId`                                            |
//! | [`health`]      | `HealthState`, `HealthRecord`                         |
//! | [`time`]        | `Day`, `SimConfig`                                    |
//! | [`tally`]       | `DayTally`                                            |
//! | [`rng`]         | `PersonRng` (per-individual), `SimRng` (global)       |
//! | [`error`]       | `EpiError`, `EpiResult`, range-check helpers          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to config and tally types.  |

pub mod error;
pub mod health;
pub mod ids;
pub mod rng;
pub mod tally;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{EpiError, EpiResult};
pub use health::{HealthRecord, HealthState};
pub use ids::PersonId;
pub use rng::{PersonRng, SimRng};
pub use tally::DayTally;
pub use time::{Day, SimConfig, DEFAULT_RETRY_LIMIT};
