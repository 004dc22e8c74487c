//! Deterministic per-individual and simulation-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Graph construction is inherently sequential (each individual's edges
//! depend on every earlier individual's), so it draws from one `SimRng`.
//!
//! The day loop instead gives each individual its own `SmallRng` seeded by:
//!
//!   seed = engine_seed XOR (person_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive ids uniformly across the seed space.  This means:
//!
//! - Individuals never share RNG state, so the order in which a day's
//!   transitions are evaluated cannot change the outcome.
//! - The per-person step can run on any thread without synchronisation.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::PersonId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── PersonRng ─────────────────────────────────────────────────────────────────

/// Per-individual deterministic RNG.
///
/// One per individual, stored in a `Vec` parallel to the health records.
/// Never shared: each worker borrows the RNGs of the individuals it steps.
pub struct PersonRng(SmallRng);

impl PersonRng {
    /// Seed deterministically from the run's engine seed and a person id.
    pub fn new(engine_seed: u64, person: PersonId) -> Self {
        let seed = engine_seed ^ (person.0 as u64).wrapping_mul(MIXING_CONSTANT);
        PersonRng(SmallRng::seed_from_u64(seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    ///
    /// `p == 0.0` never hits and `p == 1.0` always hits.
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for sequential operations (population construction,
/// seed derivation).
///
/// Used only in single-threaded contexts.  If you need parallel randomness,
/// give each worker its own RNG seeded from this one.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset, for
    /// splitting independent streams (graph, engine) off one root seed.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
