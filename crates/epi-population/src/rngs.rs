//! `PersonRngs` — per-individual RNG state for the day loop.
//!
//! # Why a separate struct?
//!
//! The day step needs `&mut PersonRngs` (exclusive access to each person's
//! RNG) and `&PopulationGraph` (shared read access to topology and
//! yesterday's health records) at the same time.  Keeping the RNGs out of the
//! graph lets the borrow checker see the two as disjoint:
//!
//! ```ignore
//! let next: Vec<HealthRecord> = rngs.inner
//!     .iter_mut()
//!     .enumerate()
//!     .map(|(i, rng)| step_day(PersonId(i as u32), &graph, &disease, rng))
//!     .collect();
//! ```

use epi_core::{PersonId, PersonRng};

/// Per-individual deterministic RNG state.
///
/// Indexed by `PersonId`.  Each RNG is only ever touched through `&mut`, so
/// Rayon's `par_iter_mut()` can hand disjoint RNGs to different threads.
pub struct PersonRngs {
    pub inner: Vec<PersonRng>,
}

impl PersonRngs {
    /// Allocate and seed `count` per-person RNGs from `engine_seed`.
    pub fn new(count: usize, engine_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| PersonRng::new(engine_seed, PersonId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one person's RNG.
    #[inline]
    pub fn get_mut(&mut self, person: PersonId) -> &mut PersonRng {
        &mut self.inner[person.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
