use planetary::{Planet, PlanetKind, PlanetSeed};
use seeded_random::RandomStream;
use stellar::Star;

use crate::metadata::GenerationMethod;
use crate::universe::Universe;

fn planet(orbit: f64, mass_earth: f64) -> Planet {
    let star = Star::solar_analog();
    let kind = PlanetKind::classify(mass_earth, orbit, star.frost_line());
    let seed = PlanetSeed {
        orbital_radius: orbit,
        mass_earth,
        eccentricity: 0.0,
        kind,
        measured_period: None,
    };
    Planet::characterize(format!("p{orbit}"), &seed, &star, &mut RandomStream::new("u"))
}

#[test]
fn test_planets_sorted_and_habitable_index() {
    let universe = Universe::new(
        "seed",
        GenerationMethod::DirectSampling,
        Star::solar_analog(),
        vec![planet(5.2, 300.0), planet(0.96, 1.0), planet(0.3, 0.5)],
    );

    let orbits: Vec<f64> = universe.planets.iter().map(|p| p.orbital_radius).collect();
    assert_eq!(orbits, vec![0.3, 0.96, 5.2]);
    assert_eq!(universe.habitable_planet, Some(1));
    assert_eq!(universe.habitable_planet().map(|p| p.orbital_radius), Some(0.96));
    assert_eq!(universe.planet_count(), 3);
}

#[test]
fn test_no_habitable_planet() {
    let universe = Universe::new(
        "seed",
        GenerationMethod::NBody,
        Star::solar_analog(),
        vec![planet(30.0, 15.0)],
    );
    assert_eq!(universe.habitable_planet, None);
    assert!(universe.habitable_planet().is_none());
    assert_eq!(universe.generation_method(), GenerationMethod::NBody);
}

#[test]
fn test_universe_json_uses_index_reference() {
    let universe = Universe::new(
        "seed",
        GenerationMethod::DirectSampling,
        Star::solar_analog(),
        vec![planet(0.96, 1.0)],
    );
    let json = serde_json::to_value(&universe).expect("serialize");

    assert_eq!(json["habitablePlanet"], 0);
    assert_eq!(json["metadata"]["generationMethod"], "directSampling");
    assert_eq!(json["seed"], "seed");
}
