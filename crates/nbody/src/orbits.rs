//! Orbit initialization and kinematic read-back.

use std::f64::consts::{PI, TAU};

use nalgebra::{Point2, Vector2};

use crate::body::Body;
use crate::forces::G;

/// Circular orbital speed √(GM/r) in AU/year.
pub fn circular_velocity(central_mass: f64, radius: f64) -> f64 {
    (G * central_mass / radius).sqrt()
}

/// Kepler's third law in solar units: P = √(a³ / M) years.
pub fn kepler_period(central_mass: f64, semi_major_axis: f64) -> f64 {
    (semi_major_axis.powi(3) / central_mass).sqrt()
}

/// Position and velocity of a body at periapsis.
///
/// The periapsis lies at `angle` radians from the x-axis; the velocity is
/// prograde and perpendicular to the radius, with the vis-viva magnitude
/// √(GM (2/r − 1/a)).
///
/// # Examples
///
/// ```
/// use nbody::orbits::{circular_velocity, periapsis_state};
///
/// let (position, velocity) = periapsis_state(1.0, 1.0, 0.0, 0.0);
/// assert!((position.x - 1.0).abs() < 1e-12);
/// assert!((velocity.y - circular_velocity(1.0, 1.0)).abs() < 1e-12);
/// ```
pub fn periapsis_state(
    central_mass: f64,
    semi_major_axis: f64,
    eccentricity: f64,
    angle: f64,
) -> (Point2<f64>, Vector2<f64>) {
    let r = semi_major_axis * (1.0 - eccentricity);
    let speed = (G * central_mass * (2.0 / r - 1.0 / semi_major_axis)).sqrt();
    let (sin, cos) = angle.sin_cos();
    (
        Point2::new(r * cos, r * sin),
        Vector2::new(-speed * sin, speed * cos),
    )
}

/// Semi-major axis −GM / 2ε of a bound orbit with specific energy `energy`.
pub fn semi_major_axis_from_energy(central_mass: f64, energy: f64) -> Option<f64> {
    let a = -G * central_mass / (2.0 * energy);
    (energy < 0.0 && a.is_finite()).then_some(a)
}

/// Running read-back of one body's orbit during an integration.
///
/// Accumulates distance and two-body energy, and unwraps the polar angle so
/// the mean motion can be measured over whole revolutions.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrbitAverager {
    samples: usize,
    radius_sum: f64,
    energy_sum: f64,
    last_energy: f64,
    last_angle: f64,
    swept_angle: f64,
    start_time: f64,
    end_time: f64,
}

impl OrbitAverager {
    /// Record `body` at simulation time `time` around a star of
    /// `central_mass` M☉.
    pub fn record(&mut self, body: &Body, central_mass: f64, time: f64) {
        let angle = body.angle();
        let energy = body.specific_orbital_energy(central_mass);

        if self.samples == 0 {
            self.start_time = time;
        } else {
            // Wrap into (−π, π]; a step never sweeps half an orbit
            let delta = angle - self.last_angle;
            self.swept_angle += delta - TAU * ((delta + PI) / TAU).floor();
        }

        self.samples += 1;
        self.radius_sum += body.orbital_radius();
        self.energy_sum += energy;
        self.last_energy = energy;
        self.last_angle = angle;
        self.end_time = time;
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    pub fn mean_radius(&self) -> Option<f64> {
        (self.samples > 0).then(|| self.radius_sum / self.samples as f64)
    }

    pub fn mean_energy(&self) -> Option<f64> {
        (self.samples > 0).then(|| self.energy_sum / self.samples as f64)
    }

    /// Energy at the last recorded sample
    pub fn final_energy(&self) -> Option<f64> {
        (self.samples > 0).then_some(self.last_energy)
    }

    /// True when the body stayed bound: both the final and the mean energy
    /// are negative.
    pub fn is_bound(&self) -> bool {
        matches!(
            (self.final_energy(), self.mean_energy()),
            (Some(last), Some(mean)) if last < 0.0 && mean < 0.0
        )
    }

    /// Semi-major axis implied by the mean energy
    pub fn semi_major_axis(&self, central_mass: f64) -> Option<f64> {
        semi_major_axis_from_energy(central_mass, self.mean_energy()?)
    }

    /// Whole and fractional revolutions swept so far
    pub fn revolutions(&self) -> f64 {
        self.swept_angle.abs() / TAU
    }

    /// Period from the measured mean motion, 2π·Δt / Δθ years.
    pub fn kinematic_period(&self) -> Option<f64> {
        let swept = self.swept_angle.abs();
        let period = TAU * (self.end_time - self.start_time) / swept;
        (swept > 0.0 && period.is_finite() && period > 0.0).then_some(period)
    }
}
