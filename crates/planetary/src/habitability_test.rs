use approx::assert_relative_eq;
use seeded_random::RandomStream;
use stellar::Star;

use crate::habitability::assess;
use crate::planet::{Planet, PlanetKind, PlanetSeed};

fn planet_at(orbit: f64, mass_earth: f64, kind: PlanetKind) -> Planet {
    let seed = PlanetSeed {
        orbital_radius: orbit,
        mass_earth,
        eccentricity: 0.0,
        kind,
        measured_period: None,
    };
    Planet::characterize("test", &seed, &Star::solar_analog(), &mut RandomStream::new("hab"))
}

#[test]
fn test_temperate_earth_analog_scores_full_marks() {
    // Just inside the inner edge of the zone is still above freezing
    let planet = planet_at(0.96, 1.0, PlanetKind::Rocky);
    let h = planet.habitability;

    assert!(h.in_habitable_zone);
    assert!(h.has_atmosphere);
    assert!(h.has_liquid_water, "T = {}", planet.surface_temperature);
    assert!(h.has_magnetic_field);
    assert_relative_eq!(h.score, 1.0, epsilon = 1e-12);
}

#[test]
fn test_cold_giant_scores_low() {
    let planet = planet_at(5.2, 318.0, PlanetKind::GasGiant);
    let h = planet.habitability;

    assert!(!h.in_habitable_zone);
    assert!(!h.has_liquid_water);
    assert!(h.has_atmosphere);
    assert_relative_eq!(h.score, 0.3, epsilon = 1e-12);
}

#[test]
fn test_airless_body_cannot_hold_water() {
    let mut planet = planet_at(0.96, 1.0, PlanetKind::Rocky);
    planet.atmosphere = None;
    let h = assess(&planet, &Star::solar_analog());

    assert!(!h.has_atmosphere);
    assert!(!h.has_liquid_water);
    assert_relative_eq!(h.score, 0.4, epsilon = 1e-12);
}

#[test]
fn test_assess_is_referentially_transparent() {
    let star = Star::solar_analog();
    let planet = planet_at(1.2, 0.5, PlanetKind::Rocky);

    let first = assess(&planet, &star);
    for _ in 0..10 {
        assert_eq!(assess(&planet, &star), first);
    }
    assert_eq!(first, planet.habitability);
}
