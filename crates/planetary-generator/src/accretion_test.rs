use approx::assert_relative_eq;
use planetary::PlanetKind;
use seeded_random::RandomStream;
use stellar::Star;

use crate::accretion::*;
use crate::config::AccretionConfig;
use crate::strategy::FormationStrategy;

fn small_config() -> AccretionConfig {
    AccretionConfig {
        protoplanets: 60,
        iterations: 500,
        ..Default::default()
    }
}

fn body(orbit: f64, mass: f64, eccentricity: f64) -> Protoplanet {
    Protoplanet {
        orbit,
        mass,
        eccentricity,
        bulk: BulkComposition::at_orbit(orbit, 2.7),
    }
}

#[test]
fn test_bulk_composition_by_zone() {
    let frost_line = 2.7;
    assert_relative_eq!(BulkComposition::at_orbit(0.5, frost_line).rock, 0.95);
    assert_relative_eq!(BulkComposition::at_orbit(2.0, frost_line).ice, 0.2);
    assert_relative_eq!(BulkComposition::at_orbit(5.0, frost_line).ice, 0.5);
    assert_relative_eq!(BulkComposition::at_orbit(20.0, frost_line).gas, 0.7);
}

#[test]
fn test_merge_conserves_mass_and_weights_orbit() {
    let a = body(1.0, 3.0e-6, 0.1);
    let b = body(2.0, 1.0e-6, 0.1);
    let m = merge(&a, &b);

    assert_relative_eq!(m.mass, 4.0e-6, epsilon = 1e-18);
    assert_relative_eq!(m.orbit, 1.25, epsilon = 1e-12);
    assert_relative_eq!(m.eccentricity, 0.07, epsilon = 1e-12);
}

#[test]
fn test_merge_caps_eccentricity() {
    let m = merge(&body(1.0, 1e-6, 0.5), &body(1.01, 1e-6, 0.5));
    assert!(m.eccentricity <= 0.3);
}

#[test]
fn test_distant_bodies_do_not_interact() {
    let bodies = vec![body(1.0, 1e-9, 0.0), body(10.0, 1e-9, 0.0)];
    assert!(interaction_candidates(&bodies, 1.0, 3.5).is_empty());
}

#[test]
fn test_close_bodies_interact() {
    let bodies = vec![body(1.0, 1e-5, 0.0), body(1.001, 1e-5, 0.0)];
    let candidates = interaction_candidates(&bodies, 1.0, 3.5);
    assert_eq!(candidates.len(), 1);
    let (i, j, p) = candidates[0];
    assert_eq!((i, j), (0, 1));
    assert!(p > 0.5 && p <= 1.0, "merge chance {}", p);
}

#[test]
fn test_disk_within_edges() {
    let config = small_config();
    let star = Star::solar_analog();
    let bodies = initialize_disk(&config, &star, &mut RandomStream::new("disk"));

    assert_eq!(bodies.len(), config.protoplanets);
    for b in &bodies {
        assert!((config.inner_edge..=config.outer_edge).contains(&b.orbit));
        assert!(b.mass > 0.0);
    }
}

#[test]
fn test_disk_carries_configured_mass() {
    let config = small_config();
    let star = Star::main_sequence(0.8, 0.3);
    let bodies = initialize_disk(&config, &star, &mut RandomStream::new("disk-mass"));
    let total: f64 = bodies.iter().map(|b| b.mass).sum();

    assert_relative_eq!(total, config.disk_mass_fraction * star.mass, max_relative = 1e-9);
}

#[test]
fn test_accretion_conserves_total_mass() {
    let config = small_config();
    let star = Star::solar_analog();
    let mut stream = RandomStream::new("conserve");
    let bodies = initialize_disk(&config, &star, &mut stream);
    let before: f64 = bodies.iter().map(|b| b.mass).sum();

    let outcome = run_accretion(&config, star.mass, bodies, &mut stream);
    let after: f64 = outcome.bodies.iter().map(|b| b.mass).sum();

    assert_relative_eq!(before, after, max_relative = 1e-9);
    assert_eq!(outcome.bodies.len() + outcome.merges, config.protoplanets);
    assert!(outcome.iterations <= config.iterations);
}

#[test]
fn test_survivors_sorted_and_eccentricity_bounded() {
    let config = small_config();
    let star = Star::solar_analog();
    let mut stream = RandomStream::new("sorted");
    let bodies = initialize_disk(&config, &star, &mut stream);
    let outcome = run_accretion(&config, star.mass, bodies, &mut stream);

    for pair in outcome.bodies.windows(2) {
        assert!(pair[0].orbit <= pair[1].orbit);
    }
    assert!(outcome.bodies.iter().all(|b| (0.0..=0.5).contains(&b.eccentricity)));
}

#[test]
fn test_zero_iterations_keeps_every_body() {
    let config = AccretionConfig {
        iterations: 0,
        ..small_config()
    };
    let star = Star::solar_analog();
    let seeds = config.form(&star, &mut RandomStream::new("frozen")).unwrap();
    assert_eq!(seeds.len(), config.protoplanets);
}

#[test]
fn test_form_is_deterministic() {
    let config = small_config();
    let star = Star::solar_analog();
    let a = config.form(&star, &mut RandomStream::new("accrete")).unwrap();
    let b = config.form(&star, &mut RandomStream::new("accrete")).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_gassy_survivor_is_giant() {
    let mut gassy = body(30.0, 1e-9, 0.0);
    gassy.bulk = BulkComposition::at_orbit(30.0, 2.7);
    assert_eq!(classify_survivor(&gassy, 2.7), PlanetKind::GasGiant);

    let rocky = body(0.5, 1e-9, 0.0);
    assert_eq!(classify_survivor(&rocky, 2.7), PlanetKind::Rocky);
}
