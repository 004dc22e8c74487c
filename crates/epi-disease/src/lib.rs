//! `epi-disease` — immutable disease parameters for the `rust_epi` simulator.
//!
//! Callers describe a disease with *cumulative* probabilities
//! ([`DiseaseParams`]); [`DiseaseParams::configure`] validates them and
//! converts them into the per-day probabilities the day loop draws against
//! ([`Disease`]).
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`rate`]    | `daily_probability`, `compound_probability`             |
//! | [`disease`] | `DiseaseParams`, `Disease`, `configure_disease`         |

pub mod disease;
pub mod rate;


pub use disease::{configure_disease, Disease, DiseaseParams};
pub use rate::{compound_probability, daily_probability};
