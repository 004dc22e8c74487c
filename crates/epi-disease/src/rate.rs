//! Conversion between cumulative and per-day probabilities.
//!
//! An event with a constant daily probability `d` happens at least once in
//! `n` independent days with probability
//!
//!   p = 1 − (1 − d)^n
//!
//! so the daily probability equivalent to a cumulative `p` over `n` days is
//!
//!   d = 1 − (1 − p)^(1/n)

/// Per-day probability equivalent to `cumulative` over `days` days.
///
/// `cumulative == 1.0` maps to `1.0` and `0.0` to `0.0`.  The caller
/// guarantees `cumulative ∈ [0, 1]` and `days ≥ 1`.
#[inline]
pub fn daily_probability(cumulative: f64, days: u64) -> f64 {
    debug_assert!(days > 0);
    1.0 - (1.0 - cumulative).powf(1.0 / days as f64)
}

/// Probability that an event with per-day probability `daily` happens at
/// least once in `days` days.  Inverse of [`daily_probability`].
#[inline]
pub fn compound_probability(daily: f64, days: u64) -> f64 {
    let days = i32::try_from(days).unwrap_or(i32::MAX);
    1.0 - (1.0 - daily).powi(days)
}
