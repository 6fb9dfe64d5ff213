//! Gravity from the central star, optionally with planet–planet terms.

use crate::forces::{ForceModel, G};
use crate::state::SystemState;
use nalgebra::Vector2;

fn star_acceleration(state: &SystemState, idx: usize, eps2: f64) -> Vector2<f64> {
    let r = state.bodies[idx].position.coords;
    let r2 = r.magnitude_squared() + eps2;
    -r * (G * state.central_mass / (r2 * r2.sqrt()))
}

fn star_potential(state: &SystemState, eps2: f64) -> f64 {
    state
        .bodies
        .iter()
        .map(|b| -G * state.central_mass * b.mass / (b.position.coords.magnitude_squared() + eps2).sqrt())
        .sum()
}

/// Star-dominated gravity: each planet feels only the central mass
///
/// Reduces the system to independent two-body problems, one per planet.
#[derive(Debug, Clone, Copy, Default)]
pub struct StarGravity;

impl ForceModel for StarGravity {
    fn acceleration(&self, idx: usize, state: &SystemState) -> Vector2<f64> {
        star_acceleration(state, idx, 0.0)
    }

    fn potential_energy(&self, state: &SystemState) -> f64 {
        star_potential(state, 0.0)
    }
}

/// Direct O(N²) gravity: the star plus every other body
///
/// # Examples
///
/// ```
/// use nbody::{DirectGravity, ForceModel, SystemState};
/// use nalgebra::{Point2, Vector2};
///
/// let mut system = SystemState::new(1.0);
/// system.add_body(0.001, Point2::new(1.0, 0.0), Vector2::new(0.0, 6.28));
///
/// let accel = DirectGravity::new().acceleration(0, &system);
/// assert!(accel.x < 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectGravity {
    /// Softening length in AU to tame close encounters
    pub softening: f64,
}

impl DirectGravity {
    pub fn new() -> Self {
        Self { softening: 0.0 }
    }

    pub fn with_softening(softening: f64) -> Self {
        Self { softening }
    }
}

impl ForceModel for DirectGravity {
    fn acceleration(&self, idx: usize, state: &SystemState) -> Vector2<f64> {
        let eps2 = self.softening * self.softening;
        let body = &state.bodies[idx];

        let a_bodies = state
            .bodies
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != idx)
            .map(|(_, other)| {
                let dr = other.position - body.position;
                let r2 = dr.magnitude_squared() + eps2;
                dr * (G * other.mass / (r2 * r2.sqrt()))
            })
            .fold(Vector2::zeros(), |acc, a| acc + a);

        star_acceleration(state, idx, eps2) + a_bodies
    }

    fn potential_energy(&self, state: &SystemState) -> f64 {
        let eps2 = self.softening * self.softening;

        // each pair counted once
        let pairs: f64 = state
            .bodies
            .iter()
            .enumerate()
            .flat_map(|(i, a)| {
                state.bodies[i + 1..].iter().map(move |b| {
                    let r = ((a.position - b.position).magnitude_squared() + eps2).sqrt();
                    -G * a.mass * b.mass / r
                })
            })
            .sum();

        star_potential(state, eps2) + pairs
    }
}

/// Hill radius a·(m / 3M)^⅓ in the units of `orbital_radius`
///
/// # Examples
///
/// ```
/// use nbody::forces::hill_radius;
///
/// // Earth's Hill radius at 1 AU is about 0.01 AU
/// let r_hill = hill_radius(3.0e-6, 1.0, 1.0);
/// assert!((r_hill - 0.01).abs() < 0.001);
/// ```
pub fn hill_radius(mass: f64, orbital_radius: f64, star_mass: f64) -> f64 {
    orbital_radius * (mass / (3.0 * star_mass)).cbrt()
}

/// Mutual Hill radius of two bodies, from their mean orbit and summed mass
pub fn mutual_hill_radius(
    mass_a: f64,
    orbit_a: f64,
    mass_b: f64,
    orbit_b: f64,
    star_mass: f64,
) -> f64 {
    hill_radius(mass_a + mass_b, 0.5 * (orbit_a + orbit_b), star_mass)
}
