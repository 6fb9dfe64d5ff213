use nalgebra::{Point2, Vector2};

use crate::forces::{DirectGravity, ForceModel, StarGravity, G};
use crate::integrator::{Integrator, Leapfrog};
use crate::state::SystemState;

fn make_test_system() -> SystemState {
    let mut system = SystemState::new(1.0);

    // Earth on a circular orbit at 1 AU: v = √(G·1/1) = 2π AU/yr
    let v_circular = (G * 1.0 / 1.0).sqrt();
    system.add_body(3.0e-6, Point2::new(1.0, 0.0), Vector2::new(0.0, v_circular));
    system
}

#[test]
fn test_leapfrog_advances_time() {
    let mut system = make_test_system();
    Leapfrog.step(&mut system, 0.01, &StarGravity);
    assert!((system.time - 0.01).abs() < 1e-15);
}

#[test]
fn test_leapfrog_circular_orbit() {
    let mut system = make_test_system();

    // One full orbit (1 year at 1 AU) in 1000 steps
    Leapfrog.integrate(&mut system, 1.0 / 1000.0, 1000, &StarGravity);

    let final_r = system.bodies[0].orbital_radius();
    let error = (final_r - 1.0).abs();
    assert!(error < 1e-3, "Radius error: {:.2e}", error);
    // back near the starting point
    assert!((system.bodies[0].position - Point2::new(1.0, 0.0)).magnitude() < 1e-2);
}

#[test]
fn test_leapfrog_conserves_energy() {
    let mut system = make_test_system();
    let force = DirectGravity::new();
    let initial = system.kinetic_energy() + force.potential_energy(&system);

    Leapfrog.integrate(&mut system, 0.01, 100, &force);

    let last = system.kinetic_energy() + force.potential_energy(&system);
    let error = (last - initial).abs() / initial.abs();
    assert!(error < 1e-3, "Energy error: {:.2e}", error);
}

#[test]
fn test_leapfrog_conserves_angular_momentum() {
    let mut system = make_test_system();
    let v2 = (G / 2.0).sqrt();
    system.add_body(3.0e-6, Point2::new(2.0, 0.0), Vector2::new(0.0, v2));
    let initial = system.total_angular_momentum();

    Leapfrog.integrate(&mut system, 0.01, 100, &DirectGravity::new());

    let error = (system.total_angular_momentum() - initial).abs() / initial.abs();
    assert!(error < 1e-10, "Angular momentum error: {:.2e}", error);
}

#[test]
fn test_observer_sees_every_step() {
    let mut system = make_test_system();
    let mut seen = Vec::new();

    let t = Leapfrog.integrate_observed(&mut system, 0.01, 25, &StarGravity, &mut |s| {
        seen.push(s.time)
    });

    assert_eq!(seen.len(), 25);
    assert!((t - 0.25).abs() < 1e-12);
    assert!(seen.windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn test_empty_system() {
    let mut system = SystemState::new(1.0);
    Leapfrog.step(&mut system, 0.01, &DirectGravity::new());
    assert_eq!(system.body_count(), 0);
}
