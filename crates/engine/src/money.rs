//! Monetary rounding and formatting helpers.
//!
//! Amounts flow through the engine as `f64` dollars rather than integer
//! cents: a per-share price (`unit_price / share_count`) is not
//! representable in cents, and the whole pipeline rounds exactly once, when
//! surcharges are distributed and totals finalized.

/// Rounds to two decimals with a half-up bias.
///
/// A machine-epsilon nudge is applied before scaling so true halves land on
/// the upper cent instead of being truncated by binary-float
/// representation. Not banker's rounding.
///
/// # Examples
///
/// ```rust
/// use engine::round2;
///
/// assert_eq!(round2(10.0 / 3.0), 3.33);
/// assert_eq!(round2(0.125), 0.13);
/// ```
#[must_use]
pub fn round2(value: f64) -> f64 {
    ((value + f64::EPSILON) * 100.0).round() / 100.0
}

/// Formats an amount with exactly two decimals, e.g. `12.5` -> `"12.50"`.
#[must_use]
pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}
