use seeded_random::RandomStream;
use stellar::Star;

use crate::config::{AccretionConfig, GenerationConfig, PlanetFormationStrategy};
use crate::error::GenerationError;
use crate::generation::*;

#[test]
fn test_universe_is_reproducible() {
    let config = GenerationConfig::default();
    let a = generate_universe("repeatable", &config).unwrap();
    let b = generate_universe("repeatable", &config).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_planets_named_after_catalog() {
    let universe = generate_universe("naming", &GenerationConfig::default()).unwrap();
    let catalog = universe.metadata.catalog_name();

    assert_eq!(universe.planets[0].name, format!("{catalog} b"));
    if let Some(second) = universe.planets.get(1) {
        assert_eq!(second.name, format!("{catalog} c"));
    }
}

#[test]
fn test_planets_sorted_outward() {
    for i in 0..20 {
        let universe = generate_universe(&format!("sorted-{i}"), &GenerationConfig::default()).unwrap();
        for pair in universe.planets.windows(2) {
            assert!(pair[0].orbital_radius <= pair[1].orbital_radius);
        }
    }
}

#[test]
fn test_invalid_config_fails_early() {
    let config = GenerationConfig {
        strategy: PlanetFormationStrategy::MonteCarloAccretion(AccretionConfig {
            protoplanets: 0,
            ..Default::default()
        }),
    };
    assert!(matches!(
        generate_universe("bad", &config),
        Err(GenerationError::InvalidConfiguration { field: "protoplanets", .. })
    ));
}

#[test]
fn test_generate_planets_uses_given_streams() {
    let star = Star::solar_analog();
    let config = GenerationConfig::default();
    let run = || {
        let root = RandomStream::new("explicit");
        generate_planets(
            "TS-0001",
            &star,
            &config,
            &mut root.scoped(FORMATION_SCOPE),
            &mut root.scoped(PLANETS_SCOPE),
        )
        .unwrap()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_stellar_stream_independent_of_strategy() {
    let direct = generate_universe("shared-star", &GenerationConfig::direct_sampling()).unwrap();
    let nbody = generate_universe(
        "shared-star",
        &GenerationConfig {
            strategy: PlanetFormationStrategy::NBody(crate::config::NBodyConfig {
                max_steps: 500,
                ..Default::default()
            }),
        },
    )
    .unwrap();
    assert_eq!(direct.star, nbody.star);
}
