use approx::assert_relative_eq;
use nbody::{kepler_period, periapsis_state, Integrator, Leapfrog, OrbitAverager, StarGravity, SystemState};
use seeded_random::RandomStream;
use stellar::Star;

use crate::config::{NBodyConfig, NBodyForce};
use crate::stabilization::*;
use crate::strategy::FormationStrategy;

fn earth_like() -> InitialOrbit {
    InitialOrbit {
        semi_major_axis: 1.0,
        mass_earth: 1.0,
        eccentricity: 0.0,
        angle: 0.0,
    }
}

#[test]
fn test_spacing_mu_is_ln_1_5() {
    assert_relative_eq!(SPACING_MU, 1.5_f64.ln(), epsilon = 1e-12);
}

#[test]
fn test_circular_orbit_recovers_kepler_period() {
    let config = NBodyConfig {
        force: NBodyForce::StarOnly,
        ..Default::default()
    };
    let settled = stabilize(&config, 1.0, &[earth_like()]);

    assert_eq!(settled.len(), 1);
    assert!(settled[0].settled);
    assert_relative_eq!(settled[0].orbital_radius, 1.0, max_relative = 1e-3);
    assert_relative_eq!(settled[0].period, kepler_period(1.0, 1.0), max_relative = 1e-2);
}

#[test]
fn test_schedule_caps_steps() {
    let config = NBodyConfig {
        max_steps: 50,
        ..Default::default()
    };
    let (dt, steps) = step_schedule(&config, 1.0, &[earth_like()]);
    assert_relative_eq!(dt, 0.01, epsilon = 1e-12);
    assert_eq!(steps, 50);
}

#[test]
fn test_schedule_covers_duration() {
    let config = NBodyConfig {
        duration_years: 2.0,
        ..Default::default()
    };
    let (dt, steps) = step_schedule(&config, 1.0, &[earth_like()]);
    assert!(dt * steps as f64 >= 2.0 - 1e-9);
}

#[test]
fn test_initial_orbits_expand_outward() {
    let config = NBodyConfig::default();
    let star = Star::solar_analog();

    for i in 0..30 {
        let orbits = sample_initial_orbits(&config, &star, &mut RandomStream::new(format!("nb-{i}")));
        assert!(!orbits.is_empty() && orbits.len() <= config.max_planets);
        assert!(orbits[0].semi_major_axis > config.inner_orbit_offset);
        for o in &orbits {
            assert!((0.0..std::f64::consts::TAU).contains(&o.angle));
            assert!((0.0..=0.9).contains(&o.eccentricity));
        }
        for pair in orbits.windows(2) {
            let ratio = pair[1].semi_major_axis / pair[0].semi_major_axis;
            assert!(ratio >= MIN_SPACING - 1e-12, "orbits stepped by {ratio}");
        }
    }
}

#[test]
fn test_initial_orbits_strictly_increase_over_many_seeds() {
    let config = NBodyConfig::default();
    let star = Star::solar_analog();

    for i in 0..300 {
        let orbits = sample_initial_orbits(&config, &star, &mut RandomStream::new(format!("spacing-{i}")));
        assert!(orbits
            .windows(2)
            .all(|pair| pair[1].semi_major_axis > pair[0].semi_major_axis));
    }
}

fn record_escape(orbit: &InitialOrbit) -> OrbitAverager {
    // Start at periapsis with twice the bound speed
    let mut state = SystemState::new(1.0);
    let (position, velocity) = periapsis_state(1.0, orbit.semi_major_axis, orbit.eccentricity, 0.0);
    state.add_body(3.0e-6, position, velocity * 2.0);

    let mut averager = OrbitAverager::default();
    let dt = 0.01;
    for step in 1..=500 {
        let body = &mut state.bodies[0];
        body.position += body.velocity * dt;
        averager.record(body, 1.0, step as f64 * dt);
    }
    averager
}

#[test]
fn test_unbound_body_does_not_settle() {
    let orbit = earth_like();
    let averager = record_escape(&orbit);

    assert!(!averager.is_bound());
    assert_eq!(settle(&orbit, &averager, 1.0), None);
}

#[test]
fn test_drifted_body_does_not_settle() {
    // A clean circular orbit at 1 AU read back against a 3 AU starting orbit
    let config = NBodyConfig {
        force: NBodyForce::StarOnly,
        ..Default::default()
    };
    let mut state = SystemState::new(1.0);
    let (position, velocity) = periapsis_state(1.0, 1.0, 0.0, 0.0);
    state.add_body(3.0e-6, position, velocity);
    let mut averager = OrbitAverager::default();
    let (dt, steps) = step_schedule(&config, 1.0, &[earth_like()]);
    for _ in 0..steps {
        Leapfrog.step(&mut state, dt, &StarGravity);
        averager.record(&state.bodies[0], 1.0, state.time);
    }

    let far = InitialOrbit {
        semi_major_axis: 3.0,
        ..earth_like()
    };
    assert!(settle(&earth_like(), &averager, 1.0).is_some());
    assert_eq!(settle(&far, &averager, 1.0), None);
}

#[test]
fn test_unobserved_bodies_keep_initial_orbit() {
    let config = NBodyConfig {
        max_steps: 0,
        ..Default::default()
    };
    let orbits = [earth_like()];
    let settled = stabilize(&config, 1.0, &orbits);

    assert!(!settled[0].settled);
    assert_eq!(settled[0].orbital_radius, 1.0);
    assert_relative_eq!(settled[0].period, 1.0);
}

#[test]
fn test_scattered_bodies_report_consistent_periods() {
    // Two Jupiters on crossing orbits scatter within a few revolutions
    let config = NBodyConfig {
        force: NBodyForce::Full,
        max_steps: 20_000,
        duration_years: 20.0,
        ..Default::default()
    };
    let orbits = [
        InitialOrbit {
            semi_major_axis: 1.0,
            mass_earth: 318.0,
            eccentricity: 0.0,
            angle: 0.0,
        },
        InitialOrbit {
            semi_major_axis: 1.05,
            mass_earth: 318.0,
            eccentricity: 0.0,
            angle: 0.1,
        },
    ];
    let settled = stabilize(&config, 1.0, &orbits);

    for (initial, result) in orbits.iter().zip(settled.iter()) {
        let kepler = kepler_period(1.0, result.orbital_radius);
        assert!((result.period - kepler).abs() <= PERIOD_TOLERANCE * kepler + 1e-12);
        if !result.settled {
            assert_eq!(result.orbital_radius, initial.semi_major_axis);
            assert_relative_eq!(result.period, kepler_period(1.0, initial.semi_major_axis));
        }
    }
}

#[test]
fn test_form_reports_measured_periods() {
    let config = NBodyConfig {
        max_steps: 2_000,
        ..Default::default()
    };
    let star = Star::solar_analog();
    let seeds = config.form(&star, &mut RandomStream::new("measured")).unwrap();

    assert!(!seeds.is_empty());
    for seed in &seeds {
        assert!(seed.orbital_radius.is_finite() && seed.orbital_radius > 0.0);
        let period = seed.measured_period.unwrap();
        let kepler = kepler_period(star.mass, seed.orbital_radius);
        assert!((period - kepler).abs() <= PERIOD_TOLERANCE * kepler);
    }
}

#[test]
fn test_form_is_deterministic() {
    let config = NBodyConfig {
        max_steps: 1_000,
        ..Default::default()
    };
    let star = Star::solar_analog();
    let a = config.form(&star, &mut RandomStream::new("nb-repeat")).unwrap();
    let b = config.form(&star, &mut RandomStream::new("nb-repeat")).unwrap();
    assert_eq!(a, b);
}
