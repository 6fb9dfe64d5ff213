use approx::assert_relative_eq;

use crate::forces::StarGravity;
use crate::integrator::{Integrator, Leapfrog};
use crate::orbits::{
    circular_velocity, kepler_period, periapsis_state, semi_major_axis_from_energy, OrbitAverager,
};
use crate::state::SystemState;

#[test]
fn test_kepler_period_solar_units() {
    assert_relative_eq!(kepler_period(1.0, 1.0), 1.0);
    assert_relative_eq!(kepler_period(1.0, 4.0), 8.0);
    assert_relative_eq!(kepler_period(4.0, 1.0), 0.5);
}

#[test]
fn test_periapsis_state_matches_vis_viva() {
    let (position, velocity) = periapsis_state(1.0, 2.0, 0.5, 0.0);
    assert_relative_eq!(position.x, 1.0, epsilon = 1e-12);

    // v² = GM(2/r − 1/a) = G·1.5
    let expected = circular_velocity(1.0, 1.0) * 1.5f64.sqrt();
    assert_relative_eq!(velocity.magnitude(), expected, epsilon = 1e-12);
    assert!(velocity.y > 0.0);
}

#[test]
fn test_kinematic_period_of_circular_orbit() {
    let mut system = SystemState::new(1.0);
    let (position, velocity) = periapsis_state(1.0, 1.0, 0.0, 0.3);
    system.add_body(3.0e-6, position, velocity);

    let mut averager = OrbitAverager::default();
    Leapfrog.integrate_observed(&mut system, 0.01, 100, &StarGravity, &mut |s| {
        averager.record(&s.bodies[0], s.central_mass, s.time)
    });

    assert_eq!(averager.samples(), 100);
    let period = averager.kinematic_period().expect("samples recorded");
    assert_relative_eq!(period, 1.0, epsilon = 1e-2);
}

#[test]
fn test_empty_averager_has_no_period() {
    let averager = OrbitAverager::default();
    assert_eq!(averager.mean_radius(), None);
    assert_eq!(averager.kinematic_period(), None);
    assert!(!averager.is_bound());
}

fn observe(semi_major_axis: f64, eccentricity: f64, speed_factor: f64, steps: usize) -> OrbitAverager {
    let mut system = SystemState::new(1.0);
    let (position, velocity) = periapsis_state(1.0, semi_major_axis, eccentricity, 0.0);
    system.add_body(3.0e-6, position, velocity * speed_factor);

    let mut averager = OrbitAverager::default();
    let dt = kepler_period(1.0, semi_major_axis) / 200.0;
    Leapfrog.integrate_observed(&mut system, dt, steps, &StarGravity, &mut |s| {
        averager.record(&s.bodies[0], s.central_mass, s.time)
    });
    averager
}

#[test]
fn test_eccentric_orbit_mean_motion_matches_kepler() {
    // Whole revolutions, so the fast periapsis passage averages out
    let averager = observe(2.0, 0.5, 1.0, 1_000);

    assert!(averager.is_bound());
    assert!(averager.revolutions() > 4.9);
    let a = averager.semi_major_axis(1.0).unwrap();
    assert_relative_eq!(a, 2.0, max_relative = 1e-2);
    let period = averager.kinematic_period().unwrap();
    assert_relative_eq!(period, kepler_period(1.0, 2.0), max_relative = 2e-2);
}

#[test]
fn test_escaping_body_is_unbound() {
    // Periapsis at 0.5 AU with speed √(3GM); 1.2× that beats escape √(4GM)
    let averager = observe(1.0, 0.5, 1.2, 400);

    assert!(averager.final_energy().unwrap() > 0.0);
    assert!(!averager.is_bound());
    assert_eq!(averager.semi_major_axis(1.0), None);
}

#[test]
fn test_semi_major_axis_from_energy() {
    // Circular orbit at 1 AU: ε = −GM / 2
    let energy = -0.5 * circular_velocity(1.0, 1.0).powi(2);
    assert_relative_eq!(semi_major_axis_from_energy(1.0, energy).unwrap(), 1.0, epsilon = 1e-12);
    assert_eq!(semi_major_axis_from_energy(1.0, 0.0), None);
    assert_eq!(semi_major_axis_from_energy(1.0, 3.0), None);
}
