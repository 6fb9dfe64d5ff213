//! Main-sequence scaling relations in solar units.
//!
//! Piecewise mass–luminosity relation (Duric 2004; Salaris & Cassisi 2005):
//! - M < 0.43 M☉: L = 0.23 M^2.3
//! - 0.43 ≤ M < 2 M☉: L = M^4
//! - 2 ≤ M < 55 M☉: L = 1.4 M^3.5
//! - M ≥ 55 M☉: L = 32000 M

use units::constants::SOLAR_TEMPERATURE_K;
use units::{checked_divide, checked_pow, with_fallback};

/// Main-sequence lifetime of the Sun in years
pub const SOLAR_LIFETIME_YEARS: f64 = 1.0e10;

/// Luminosity in L☉ for a main-sequence star of `mass` M☉.
pub fn luminosity(mass: f64) -> f64 {
    let value = if mass < 0.43 {
        checked_pow(mass, 2.3).map(|p| 0.23 * p)
    } else if mass < 2.0 {
        checked_pow(mass, 4.0)
    } else if mass < 55.0 {
        checked_pow(mass, 3.5).map(|p| 1.4 * p)
    } else {
        Some(32_000.0 * mass)
    };
    with_fallback(value, 1.0, "stellar luminosity")
}

/// Radius in R☉: M^0.8 below one solar mass, M^0.57 above.
pub fn radius(mass: f64) -> f64 {
    let exponent = if mass < 1.0 { 0.8 } else { 0.57 };
    with_fallback(checked_pow(mass, exponent), 1.0, "stellar radius")
}

/// Effective temperature in K: T = 5778 M^0.505.
pub fn temperature(mass: f64) -> f64 {
    with_fallback(
        checked_pow(mass, 0.505).map(|p| SOLAR_TEMPERATURE_K * p),
        SOLAR_TEMPERATURE_K,
        "stellar temperature",
    )
}

/// Main-sequence lifetime in years: 10¹⁰ · M / L.
pub fn lifetime(mass: f64, luminosity: f64) -> f64 {
    with_fallback(
        checked_divide(SOLAR_LIFETIME_YEARS * mass, luminosity),
        SOLAR_LIFETIME_YEARS,
        "stellar lifetime",
    )
}
