use approx::assert_relative_eq;
use units::constants::HYDROGEN_MOLECULE_KG;
use units::{Length, Mass};

use crate::composition::Composition;
use crate::physics::*;

#[test]
fn test_earth_reference_values() {
    let mass = Mass::from_earth_masses(1.0);
    let radius = planet_radius(mass, false);

    assert_relative_eq!(radius.to_earth_radii(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(surface_gravity(mass, radius), 9.82, epsilon = 0.01);
    assert_relative_eq!(escape_velocity(mass, radius), 11_186.0, epsilon = 5.0);
    assert_relative_eq!(density(mass, radius), 5_513.0, epsilon = 5.0);
    assert_relative_eq!(orbital_period_years(1.0, 1.0), 1.0);
    assert_relative_eq!(equilibrium_temperature(1.0, 1.0), 278.3, epsilon = 0.5);
}

#[test]
fn test_gas_giant_radius_is_nearly_flat() {
    let jupiter = planet_radius(Mass::from_jupiter_masses(1.0), true);
    let heavy = planet_radius(Mass::from_jupiter_masses(10.0), true);

    assert_relative_eq!(jupiter.to_jupiter_radii(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(heavy / jupiter, 10f64.powf(0.1), epsilon = 1e-12);
}

#[test]
fn test_radius_floor() {
    let pebble = planet_radius(Mass::from_kg(1.0), false);
    assert_relative_eq!(pebble.to_km(), MIN_RADIUS_KM);

    let zero = planet_radius(Mass::from_kg(0.0), true);
    assert_relative_eq!(zero.to_km(), MIN_RADIUS_KM);
}

#[test]
fn test_fallbacks_for_degenerate_inputs() {
    assert_eq!(orbital_period_years(0.0, 1.0), ORBITAL_PERIOD_FALLBACK_YEARS);
    assert_eq!(
        escape_velocity(Mass::from_earth_masses(1.0), Length::from_meters(0.0)),
        ESCAPE_VELOCITY_FALLBACK
    );
    assert_eq!(equilibrium_temperature(1.0, 0.0), SURFACE_TEMPERATURE_FALLBACK);
    assert_eq!(equilibrium_temperature(f64::NAN, 1.0), SURFACE_TEMPERATURE_FALLBACK);
    assert_eq!(scale_height(288.0, 0.029, 0.0), SCALE_HEIGHT_FALLBACK);
}

#[test]
fn test_jeans_retention_of_hydrogen() {
    let lambda = jeans_parameter(11_186.0, 278.0, HYDROGEN_MOLECULE_KG).expect("finite");
    assert!(lambda > 50.0 && lambda < 60.0, "λ = {}", lambda);

    assert!(retains_gas(11_186.0, 278.0, HYDROGEN_MOLECULE_KG));
    assert!(!retains_gas(2_000.0, 400.0, HYDROGEN_MOLECULE_KG));
    assert!(retains_gas(11_186.0, 0.0, HYDROGEN_MOLECULE_KG));
}

#[test]
fn test_magnetic_field_by_kind() {
    let rocky = magnetic_field(Mass::from_earth_masses(2.0), &Composition::rocky());
    let giant = magnetic_field(Mass::from_jupiter_masses(4.0), &Composition::gas_giant());

    assert_relative_eq!(rocky, 2.0e-5, epsilon = 1e-12);
    assert_relative_eq!(giant, 8.0e-4, epsilon = 1e-12);
}
