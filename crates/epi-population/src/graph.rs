//! `PopulationGraph` — individuals, their acquaintance edges, and their
//! current health.
//!
//! # Layout
//!
//! Per-person data is stored Structure-of-Arrays style; a `PersonId` is the
//! index into every `Vec`:
//!
//! ```ignore
//! let friends = graph.neighbors(person);          // &[PersonId]
//! let record  = graph.health()[person.index()];   // HealthRecord
//! ```
//!
//! Adjacency lists keep insertion order, so an individual's neighbor scan is
//! deterministic.  Membership tests go through a separate edge set keyed on
//! the unordered pair, so `are_connected` is O(1) regardless of degree.
//!
//! # Invariants
//!
//! - The edge relation is symmetric: `b ∈ neighbors(a) ⇔ a ∈ neighbors(b)`.
//! - No self-loops and at most one edge per unordered pair.
//! - Every `Vec` has exactly `len()` elements.

use rustc_hash::FxHashSet;

use epi_core::{EpiError, EpiResult, HealthRecord, HealthState, PersonId};

/// Read-only view of one individual.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Individual<'a> {
    pub id:           PersonId,
    pub health_state: HealthState,
    pub days_sick:    u32,
    pub is_immune:    bool,
    pub neighbors:    &'a [PersonId],
}

/// The population: fixed topology plus the mutable per-person health records.
#[derive(Clone, Debug)]
pub struct PopulationGraph {
    immune:    Vec<bool>,
    neighbors: Vec<Vec<PersonId>>,
    /// Unordered pairs, stored as `(min, max)`.
    edges:     FxHashSet<(PersonId, PersonId)>,
    health:    Vec<HealthRecord>,
}

#[inline]
fn edge_key(a: PersonId, b: PersonId) -> (PersonId, PersonId) {
    if a <= b { (a, b) } else { (b, a) }
}

impl PopulationGraph {
    /// An edgeless, all-healthy population.  `immune.len()` is the size.
    pub(crate) fn edgeless(immune: Vec<bool>) -> Self {
        let n = immune.len();
        Self {
            immune,
            neighbors: vec![Vec::new(); n],
            edges:     FxHashSet::default(),
            health:    vec![HealthRecord::HEALTHY; n],
        }
    }

    /// Build a population with an explicit edge list.
    ///
    /// Duplicate pairs (in either orientation) are collapsed.  A self-loop or
    /// an id outside `0..immune.len()` is rejected.
    pub fn from_edges<I>(immune: Vec<bool>, edges: I) -> EpiResult<Self>
    where
        I: IntoIterator<Item = (PersonId, PersonId)>,
    {
        epi_core::error::positive("population_size", immune.len())?;
        let n = immune.len();
        let mut graph = Self::edgeless(immune);
        for (a, b) in edges {
            if a.index() >= n {
                return Err(EpiError::invalid("edge", a, "an id inside the population"));
            }
            if b.index() >= n {
                return Err(EpiError::invalid("edge", b, "an id inside the population"));
            }
            if a == b {
                return Err(EpiError::invalid("edge", a, "two distinct individuals"));
            }
            graph.connect(a, b);
        }
        Ok(graph)
    }

    /// Add the undirected edge `{a, b}` unless it already exists.
    ///
    /// Returns `true` if a new edge was inserted.  Callers guarantee
    /// `a != b` and both ids are in range.
    pub(crate) fn connect(&mut self, a: PersonId, b: PersonId) -> bool {
        debug_assert_ne!(a, b, "self-loops are not allowed");
        if !self.edges.insert(edge_key(a, b)) {
            return false;
        }
        self.neighbors[a.index()].push(b);
        self.neighbors[b.index()].push(a);
        true
    }

    // ── Topology queries ──────────────────────────────────────────────────

    /// Number of individuals.
    #[inline]
    pub fn len(&self) -> usize {
        self.immune.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.immune.is_empty()
    }

    /// Iterator over all `PersonId`s in ascending index order.
    pub fn person_ids(&self) -> impl Iterator<Item = PersonId> + '_ {
        (0..self.len() as u32).map(PersonId)
    }

    /// Acquaintances of `person`, in the order the edges were created.
    #[inline]
    pub fn neighbors(&self, person: PersonId) -> &[PersonId] {
        &self.neighbors[person.index()]
    }

    /// `true` if `a` and `b` share an edge.
    #[inline]
    pub fn are_connected(&self, a: PersonId, b: PersonId) -> bool {
        self.edges.contains(&edge_key(a, b))
    }

    #[inline]
    pub fn degree(&self, person: PersonId) -> usize {
        self.neighbors[person.index()].len()
    }

    /// Number of undirected edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn mean_degree(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        2.0 * self.edge_count() as f64 / self.len() as f64
    }

    #[inline]
    pub fn is_immune(&self, person: PersonId) -> bool {
        self.immune[person.index()]
    }

    pub fn immune_count(&self) -> usize {
        self.immune.iter().filter(|&&i| i).count()
    }

    // ── Health state ──────────────────────────────────────────────────────

    /// Current health record of every individual, indexed by `PersonId`.
    #[inline]
    pub fn health(&self) -> &[HealthRecord] {
        &self.health
    }

    /// Mutable access for seeding initial infections.
    #[inline]
    pub fn health_mut(&mut self) -> &mut [HealthRecord] {
        &mut self.health
    }

    /// Swap in the next day's records and hand back the previous ones so the
    /// caller can reuse the allocation as tomorrow's write buffer.
    ///
    /// Rejects `next` unless it holds exactly one record per individual; the
    /// current records are then kept.
    pub fn replace_health(&mut self, next: Vec<HealthRecord>) -> EpiResult<Vec<HealthRecord>> {
        if next.len() != self.len() {
            return Err(EpiError::invalid(
                "health",
                next.len(),
                "one record per individual",
            ));
        }
        Ok(std::mem::replace(&mut self.health, next))
    }

    /// Read-only view of one individual.
    pub fn individual(&self, person: PersonId) -> Individual<'_> {
        let record = self.health[person.index()];
        Individual {
            id:           person,
            health_state: record.state,
            days_sick:    record.days_sick,
            is_immune:    self.immune[person.index()],
            neighbors:    self.neighbors(person),
        }
    }

    /// All individuals in id order.
    pub fn individuals(&self) -> impl Iterator<Item = Individual<'_>> + '_ {
        self.person_ids().map(move |p| self.individual(p))
    }
}
