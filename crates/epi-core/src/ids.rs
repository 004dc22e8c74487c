//! Strongly typed identifier for individuals.
//!
//! `PersonId` is `Copy + Ord + Hash` so it can be used as a map key and sorted
//! without ceremony.  The inner integer is `pub` to allow direct indexing into
//! per-person `Vec`s, but callers should prefer `.index()` for clarity.

use std::fmt;

/// Index of an individual in the population, stable for the whole run.
/// Max ~4.3 billion individuals.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonId(pub u32);

impl PersonId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PersonId({})", self.0)
    }
}

impl From<PersonId> for usize {
    #[inline(always)]
    fn from(id: PersonId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for PersonId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<PersonId, Self::Error> {
        u32::try_from(n).map(PersonId)
    }
}
