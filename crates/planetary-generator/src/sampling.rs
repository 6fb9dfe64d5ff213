//! Shared planet sampling
//!
//! Count, mass and orbit-shape draws used by more than one formation
//! strategy. Every function consumes a fixed, documented number of draws so
//! the sequence within a stream stays stable.

use planetary::PlanetKind;
use seeded_random::RandomStream;

/// Log-space mean of rocky planet masses (M⊕)
pub const ROCKY_MASS_MU: f64 = 0.0;
/// Log-space mean of gas-giant masses, ln 50 M⊕
pub const GIANT_MASS_MU: f64 = 3.912_023_005_428_146;
/// Log-space spread shared by both mass distributions
pub const MASS_SIGMA: f64 = 1.5;

/// Mass clamp in Earth masses
pub const MIN_PLANET_MASS: f64 = 0.01;
pub const MAX_PLANET_MASS: f64 = 1_000.0;

/// Orbits never reach perfect ejection
pub const MAX_ECCENTRICITY: f64 = 0.9;

/// Planet count: `min(poisson(rate) + 1, max_planets)`
///
/// Every system hosts at least one planet.
///
/// # Examples
///
/// ```
/// use planetary_generator::sampling::sample_planet_count;
/// use seeded_random::RandomStream;
///
/// let mut stream = RandomStream::new("count");
/// let n = sample_planet_count(&mut stream, 2.0, 10);
/// assert!((1..=10).contains(&n));
/// ```
pub fn sample_planet_count(stream: &mut RandomStream, rate: f64, max_planets: usize) -> usize {
    let drawn = stream.poisson(rate).saturating_add(1);
    usize::try_from(drawn).unwrap_or(usize::MAX).min(max_planets.max(1))
}

/// Log-normal planet mass in M⊕, centred on the regime implied by the orbit.
///
/// Orbits past the frost line sample around 50 M⊕, orbits inside it around
/// 1 M⊕. One draw.
pub fn sample_planet_mass(stream: &mut RandomStream, beyond_frost_line: bool) -> f64 {
    let mu = if beyond_frost_line {
        GIANT_MASS_MU
    } else {
        ROCKY_MASS_MU
    };
    stream
        .log_normal(mu, MASS_SIGMA)
        .clamp(MIN_PLANET_MASS, MAX_PLANET_MASS)
}

/// Eccentricity from Beta(1, 5): mostly near-circular. One draw.
pub fn sample_eccentricity(stream: &mut RandomStream) -> f64 {
    stream.beta(1.0, 5.0).clamp(0.0, MAX_ECCENTRICITY)
}

/// Log-uniform value in `[min, max]`. One draw.
pub fn log_uniform(stream: &mut RandomStream, min: f64, max: f64) -> f64 {
    let (log_min, log_max) = (min.ln(), max.ln());
    (log_min + stream.uniform() * (log_max - log_min)).exp()
}

/// Kind for a sampled orbit and mass, relative to the star's frost line.
pub fn classify(mass_earth: f64, orbital_radius: f64, frost_line: f64) -> PlanetKind {
    PlanetKind::classify(mass_earth, orbital_radius, frost_line)
}
