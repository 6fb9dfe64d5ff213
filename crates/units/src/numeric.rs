//! Guarded arithmetic shared by every physical formula.
//!
//! The `checked_*` helpers return `None` whenever the plain operation would
//! produce `NaN` or an infinity. Callers resolve that with [`with_fallback`],
//! which substitutes the formula's documented default and records the event
//! at `debug` level so fallbacks stay visible in traces.

use tracing::debug;

/// Smallest magnitude accepted as a divisor.
pub const MIN_DIVISOR: f64 = 1e-300;

/// Returns `value` if it is finite, otherwise `fallback`.
pub fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

/// `numerator / denominator`, or `None` for a near-zero divisor or a
/// non-finite result.
pub fn checked_divide(numerator: f64, denominator: f64) -> Option<f64> {
    if !denominator.is_finite() || denominator.abs() < MIN_DIVISOR {
        return None;
    }
    let value = numerator / denominator;
    value.is_finite().then_some(value)
}

/// `base^exponent`, or `None` when the result is not finite.
pub fn checked_pow(base: f64, exponent: f64) -> Option<f64> {
    let value = base.powf(exponent);
    value.is_finite().then_some(value)
}

/// `√value`, or `None` for negative or non-finite input.
pub fn checked_sqrt(value: f64) -> Option<f64> {
    if value.is_finite() && value >= 0.0 {
        Some(value.sqrt())
    } else {
        None
    }
}

/// Resolves a checked computation, substituting `fallback` when it failed.
///
/// # Examples
///
/// ```rust
/// use units::{checked_divide, with_fallback};
///
/// let period = with_fallback(checked_divide(1.0, 0.0), 1.0, "orbital period");
/// assert_eq!(period, 1.0);
/// ```
pub fn with_fallback(value: Option<f64>, fallback: f64, quantity: &'static str) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        _ => {
            debug!(quantity, fallback, "degenerate input, using fallback value");
            fallback
        }
    }
}
