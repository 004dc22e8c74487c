//! Simulator error type.
//!
//! There is a single domain error kind: a construction-time input that is
//! out of range.  Once a population and disease have been built, nothing in
//! the day loop can fail.  Sub-crates wrap `EpiError` as one variant of their
//! own error enums.

use std::fmt::Display;

use thiserror::Error;

/// The top-level error type for `epi-core` and a common base for sub-crates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EpiError {
    #[error("invalid parameter `{name}` = {value}: expected {expected}")]
    InvalidParameter {
        name:     &'static str,
        value:    String,
        expected: &'static str,
    },
}

impl EpiError {
    pub fn invalid(name: &'static str, value: impl Display, expected: &'static str) -> Self {
        EpiError::InvalidParameter {
            name,
            value: value.to_string(),
            expected,
        }
    }

    /// Name of the offending parameter.
    pub fn parameter(&self) -> &'static str {
        match self {
            EpiError::InvalidParameter { name, .. } => name,
        }
    }
}

/// Shorthand result type for all `epi-*` crates.
pub type EpiResult<T> = Result<T, EpiError>;

// ── Range checks ──────────────────────────────────────────────────────────────

/// Accept `p` if it is a finite probability in `[0, 1]`.
///
/// NaN fails the check, so a probability that came out of a bad parse can
/// never reach `gen_bool`.
pub fn probability(name: &'static str, p: f64) -> EpiResult<f64> {
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(EpiError::invalid(name, p, "a probability in [0, 1]"))
    }
}

/// Accept `n` if it is strictly positive.
pub fn positive<T>(name: &'static str, n: T) -> EpiResult<T>
where
    T: PartialOrd + Default + Display + Copy,
{
    if n > T::default() {
        Ok(n)
    } else {
        Err(EpiError::invalid(name, n, "a value greater than 0"))
    }
}
