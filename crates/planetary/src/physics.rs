//! Closed-form planetary physics in SI units
//!
//! Every formula routes through the guarded helpers in [`units::numeric`];
//! the `*_FALLBACK` constants are the values used when an input is
//! degenerate (zero mass, zero orbit, zero luminosity).

use std::f64::consts::PI;

use units::constants::{
    BOLTZMANN, G, GAS_CONSTANT, SOLAR_LUMINOSITY_W, STEFAN_BOLTZMANN,
};
use units::{checked_divide, checked_pow, checked_sqrt, with_fallback, Length, Mass};

use crate::composition::Composition;

/// Smallest physical planet radius
pub const MIN_RADIUS_KM: f64 = 100.0;

/// One Julian year, used when Kepler's law has no usable star mass
pub const ORBITAL_PERIOD_FALLBACK_YEARS: f64 = 1.0;
/// Earth's escape velocity (m/s)
pub const ESCAPE_VELOCITY_FALLBACK: f64 = 11_200.0;
/// Earth's mean surface temperature (K)
pub const SURFACE_TEMPERATURE_FALLBACK: f64 = 288.0;
/// Earth's surface gravity (m/s²)
pub const SURFACE_GRAVITY_FALLBACK: f64 = 9.81;
/// Earth's bulk density (kg/m³)
pub const DENSITY_FALLBACK: f64 = 5_514.0;
/// Earth's atmospheric scale height (m)
pub const SCALE_HEIGHT_FALLBACK: f64 = 8_500.0;

/// Jeans parameter above which a gas is retained over geological time
pub const JEANS_RETENTION_THRESHOLD: f64 = 6.0;

/// Field (T) a rocky dynamo produces per Earth mass
const ROCKY_DYNAMO_TESLA_PER_EARTH_MASS: f64 = 1.0e-5;
/// Field (T) of a Jupiter-mass metallic-hydrogen dynamo
const GIANT_DYNAMO_TESLA: f64 = 4.0e-4;

/// Mass–radius relation, floored at [`MIN_RADIUS_KM`].
///
/// - Rocky: R = R⊕ (M / M⊕)^0.27
/// - Gas giant: R = R_J (M / M_J)^0.1 (degenerate interiors barely grow)
pub fn planet_radius(mass: Mass, gas_giant: bool) -> Length {
    let radius = if gas_giant {
        checked_pow(mass.to_jupiter_masses(), 0.1).map(Length::from_jupiter_radii)
    } else {
        checked_pow(mass.to_earth_masses(), 0.27).map(Length::from_earth_radii)
    };
    radius
        .unwrap_or(Length::from_km(MIN_RADIUS_KM))
        .max(Length::from_km(MIN_RADIUS_KM))
}

/// Kepler's third law in solar units: P = √(a³ / M★) years.
pub fn orbital_period_years(star_mass_solar: f64, orbital_radius_au: f64) -> f64 {
    let ratio = checked_divide(orbital_radius_au.powi(3), star_mass_solar);
    with_fallback(
        ratio.and_then(checked_sqrt),
        ORBITAL_PERIOD_FALLBACK_YEARS,
        "orbital period",
    )
}

/// g = GM / r² (m/s²)
pub fn surface_gravity(mass: Mass, radius: Length) -> f64 {
    with_fallback(
        checked_divide(G * mass.to_kg(), radius.to_meters().powi(2)),
        SURFACE_GRAVITY_FALLBACK,
        "surface gravity",
    )
}

/// v_esc = √(2GM / r) (m/s)
pub fn escape_velocity(mass: Mass, radius: Length) -> f64 {
    with_fallback(
        checked_divide(2.0 * G * mass.to_kg(), radius.to_meters()).and_then(checked_sqrt),
        ESCAPE_VELOCITY_FALLBACK,
        "escape velocity",
    )
}

/// Bulk density (kg/m³)
pub fn density(mass: Mass, radius: Length) -> f64 {
    let volume = 4.0 / 3.0 * PI * radius.to_meters().powi(3);
    with_fallback(checked_divide(mass.to_kg(), volume), DENSITY_FALLBACK, "density")
}

/// Equilibrium temperature T = (F / 4σ)^¼ for the stellar flux F at the orbit.
///
/// # Example
/// ```
/// use planetary::physics::equilibrium_temperature;
///
/// let t = equilibrium_temperature(1.0, 1.0);
/// assert!((t - 278.0).abs() < 2.0);
/// ```
pub fn equilibrium_temperature(luminosity_solar: f64, orbital_radius_au: f64) -> f64 {
    let distance = Length::from_au(orbital_radius_au).to_meters();
    let flux = checked_divide(
        luminosity_solar * SOLAR_LUMINOSITY_W,
        4.0 * PI * distance * distance,
    );
    with_fallback(
        flux.and_then(|f| checked_pow(f / (4.0 * STEFAN_BOLTZMANN), 0.25)),
        SURFACE_TEMPERATURE_FALLBACK,
        "surface temperature",
    )
}

/// Most probable thermal speed √(2kT / m) of a molecule of mass `molecule_kg`.
pub fn thermal_velocity(temperature: f64, molecule_kg: f64) -> Option<f64> {
    checked_divide(2.0 * BOLTZMANN * temperature, molecule_kg).and_then(checked_sqrt)
}

/// Jeans escape parameter λ = (v_esc / v_thermal)².
pub fn jeans_parameter(escape_velocity: f64, temperature: f64, molecule_kg: f64) -> Option<f64> {
    let v_thermal = thermal_velocity(temperature, molecule_kg)?;
    checked_divide(escape_velocity, v_thermal).map(|ratio| ratio * ratio)
}

/// Whether a gas of `molecule_kg` stays bound (λ > 6).
///
/// A zero or undefined thermal speed means nothing escapes.
pub fn retains_gas(escape_velocity: f64, temperature: f64, molecule_kg: f64) -> bool {
    jeans_parameter(escape_velocity, temperature, molecule_kg)
        .map_or(escape_velocity > 0.0, |lambda| lambda > JEANS_RETENTION_THRESHOLD)
}

/// Isothermal scale height H = RT / (μ g) in meters.
pub fn scale_height(temperature: f64, molar_mass: f64, surface_gravity: f64) -> f64 {
    with_fallback(
        checked_divide(GAS_CONSTANT * temperature, molar_mass * surface_gravity),
        SCALE_HEIGHT_FALLBACK,
        "scale height",
    )
}

/// Surface magnetic field in Tesla.
///
/// Rocky planets need an iron-dominated core and scale linearly with mass;
/// giants scale with √(M / M_J).
pub fn magnetic_field(mass: Mass, composition: &Composition) -> f64 {
    match composition {
        Composition::GasGiant(_) => GIANT_DYNAMO_TESLA * mass.to_jupiter_masses().max(0.0).sqrt(),
        Composition::Rocky(_) if composition.has_iron_core() => {
            ROCKY_DYNAMO_TESLA_PER_EARTH_MASS * mass.to_earth_masses().max(0.0)
        }
        Composition::Rocky(_) => 0.0,
    }
}
