use proptest::prelude::*;
use seeded_random::RandomStream;

use crate::generation::generate_star;
use crate::spectral::LuminosityClass;
use crate::star::Star;

#[test]
fn test_generation_is_deterministic() {
    let a = generate_star(&mut RandomStream::new("test-seed-1").scoped("stellar"));
    let b = generate_star(&mut RandomStream::new("test-seed-1").scoped("stellar"));
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).expect("serialize"),
        serde_json::to_string(&b).expect("serialize")
    );
}

#[test]
fn test_distinct_seeds_vary() {
    let masses: Vec<f64> = (0..20)
        .map(|i| generate_star(&mut RandomStream::new(format!("seed-{i}"))).mass)
        .collect();
    let mut unique = masses.clone();
    unique.dedup();
    assert!(unique.len() > 15, "masses barely vary: {:?}", masses);
}

#[test]
fn test_solar_analog() {
    let sun = Star::solar_analog();
    assert_eq!(sun.luminosity_class, LuminosityClass::V);
    assert!((sun.frost_line() - 2.71).abs() < 0.01);
    assert!(sun.habitable_zone().contains(1.0));
    assert!((sun.age_fraction() - 0.46).abs() < 1e-12);
}

#[test]
fn test_main_sequence_clamps_inputs() {
    let tiny = Star::main_sequence(0.01, -1.0);
    assert_eq!(tiny.mass, 0.08);
    assert_eq!(tiny.age, 0.0);

    let huge = Star::main_sequence(500.0, 2.0);
    assert_eq!(huge.mass, 100.0);
    assert_eq!(huge.age, huge.lifetime);
}

proptest! {
    #[test]
    fn generated_stars_satisfy_invariants(seed in "[a-zA-Z0-9-]{1,16}") {
        let star = generate_star(&mut RandomStream::new(seed));
        prop_assert!((0.08..=100.0).contains(&star.mass));
        prop_assert!(star.age >= 0.0 && star.age <= star.lifetime);
        prop_assert!(star.luminosity > 0.0 && star.radius > 0.0);
    }
}
