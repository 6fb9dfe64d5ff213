//! N-body stabilization
//!
//! Samples initial orbits, integrates them with a fixed-step leapfrog for a
//! short simulated span, and reads back each body's orbit: the semi-major
//! axis from its mean two-body energy and, once it has swept enough
//! revolutions, the period from its measured mean motion.
//!
//! A body that ends unbound, drifts far from where it started, or whose
//! measured period disagrees with its orbit keeps its initial orbit and the
//! Kepler period.

use nbody::{
    kepler_period, periapsis_state, DirectGravity, ForceModel, Integrator, Leapfrog,
    OrbitAverager, StarGravity, SystemState,
};
use planetary::PlanetSeed;
use seeded_random::RandomStream;
use star_system::GenerationMethod;
use stellar::Star;
use tracing::{debug, warn};
use units::Mass;

use crate::config::{NBodyConfig, NBodyForce};
use crate::error::GenerationResult;
use crate::sampling::{classify, sample_eccentricity, sample_planet_count, sample_planet_mass};
use crate::strategy::FormationStrategy;

/// Log-normal spacing factor between neighbours: median 1.5×
pub const SPACING_MU: f64 = 0.405_465_108_108_164_4;
pub const SPACING_SIGMA: f64 = 0.3;
/// Floor on the spacing factor so orbits always step outward
pub const MIN_SPACING: f64 = 1.2;

/// Largest accepted ratio between settled and initial semi-major axis
pub const MAX_DRIFT: f64 = 2.0;
/// Revolutions needed before the measured mean motion is trusted
pub const MIN_REVOLUTIONS: f64 = 5.0;
/// Largest accepted relative gap between measured and Kepler period
pub const PERIOD_TOLERANCE: f64 = 0.25;

/// Sampled starting conditions for one planet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialOrbit {
    /// Semi-major axis (AU)
    pub semi_major_axis: f64,
    pub mass_earth: f64,
    pub eccentricity: f64,
    /// Direction of periapsis (radians)
    pub angle: f64,
}

/// Orbit read back from the integration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StabilizedOrbit {
    /// Semi-major axis (AU)
    pub orbital_radius: f64,
    /// Orbital period (years)
    pub period: f64,
    /// False when the body fell back to its initial orbit
    pub settled: bool,
}

impl StabilizedOrbit {
    fn initial(orbit: &InitialOrbit, star_mass: f64) -> Self {
        Self {
            orbital_radius: orbit.semi_major_axis,
            period: kepler_period(star_mass, orbit.semi_major_axis),
            settled: false,
        }
    }
}

/// Draw the starting orbits.
///
/// Draw order: count, first orbit, then per planet mass, eccentricity,
/// spacing factor and periapsis angle.
pub fn sample_initial_orbits(
    config: &NBodyConfig,
    star: &Star,
    stream: &mut RandomStream,
) -> Vec<InitialOrbit> {
    let frost_line = star.frost_line();
    let count = sample_planet_count(stream, config.planet_rate, config.max_planets);
    let mut orbit = config.inner_orbit_offset + stream.exponential(config.inner_orbit_rate);

    (0..count)
        .map(|_| {
            let mass_earth = sample_planet_mass(stream, orbit > frost_line);
            let eccentricity = sample_eccentricity(stream);
            let semi_major_axis = orbit;
            orbit *= stream.log_normal(SPACING_MU, SPACING_SIGMA).max(MIN_SPACING);
            let angle = stream.uniform_range(0.0, std::f64::consts::TAU);
            InitialOrbit {
                semi_major_axis,
                mass_earth,
                eccentricity,
                angle,
            }
        })
        .collect()
}

/// Step size and count for a run: the innermost orbit gets
/// `steps_per_orbit` steps, capped by `max_steps`.
pub fn step_schedule(config: &NBodyConfig, star_mass: f64, orbits: &[InitialOrbit]) -> (f64, usize) {
    let shortest = orbits
        .iter()
        .map(|o| kepler_period(star_mass, o.semi_major_axis))
        .filter(|p| p.is_finite() && *p > 0.0)
        .fold(f64::INFINITY, f64::min);
    if !shortest.is_finite() {
        return (config.duration_years, 0);
    }

    let dt = shortest / config.steps_per_orbit as f64;
    let wanted = (config.duration_years / dt).ceil();
    let steps = if wanted >= config.max_steps as f64 {
        config.max_steps
    } else {
        wanted as usize
    };
    (dt, steps)
}

/// Read back one body's orbit, or `None` if it did not settle.
pub fn settle(orbit: &InitialOrbit, averager: &OrbitAverager, star_mass: f64) -> Option<StabilizedOrbit> {
    if !averager.is_bound() {
        return None;
    }
    let a = averager.semi_major_axis(star_mass)?;
    let drift = a / orbit.semi_major_axis;
    if !(1.0 / MAX_DRIFT..=MAX_DRIFT).contains(&drift) {
        return None;
    }

    let kepler = kepler_period(star_mass, a);
    let period = if averager.revolutions() >= MIN_REVOLUTIONS {
        averager.kinematic_period()?
    } else {
        kepler
    };
    ((period - kepler).abs() <= PERIOD_TOLERANCE * kepler).then_some(StabilizedOrbit {
        orbital_radius: a,
        period,
        settled: true,
    })
}

/// Integrate `orbits` around a star of `star_mass` M☉. Draws nothing.
pub fn stabilize(config: &NBodyConfig, star_mass: f64, orbits: &[InitialOrbit]) -> Vec<StabilizedOrbit> {
    let mut state = SystemState::new(star_mass);
    for orbit in orbits {
        let (position, velocity) =
            periapsis_state(star_mass, orbit.semi_major_axis, orbit.eccentricity, orbit.angle);
        let mass = Mass::from_earth_masses(orbit.mass_earth).to_solar_masses();
        state.add_body(mass, position, velocity);
    }

    let force: Box<dyn ForceModel> = match config.force {
        NBodyForce::StarOnly => Box::new(StarGravity),
        NBodyForce::Full => Box::new(DirectGravity::with_softening(config.softening)),
    };
    let (dt, steps) = step_schedule(config, star_mass, orbits);

    let mut averagers = vec![OrbitAverager::default(); orbits.len()];
    let elapsed = Leapfrog.integrate_observed(&mut state, dt, steps, force.as_ref(), &mut |s: &SystemState| {
        averagers
            .iter_mut()
            .zip(s.bodies.iter())
            .for_each(|(avg, body)| avg.record(body, s.central_mass, s.time));
    });
    debug!(steps, dt, elapsed, bodies = orbits.len(), "n-body stabilization finished");

    orbits
        .iter()
        .zip(averagers.iter())
        .map(|(orbit, avg)| {
            settle(orbit, avg, star_mass).unwrap_or_else(|| {
                warn!(
                    semi_major_axis = orbit.semi_major_axis,
                    final_energy = ?avg.final_energy(),
                    revolutions = avg.revolutions(),
                    "body did not settle, keeping initial orbit"
                );
                StabilizedOrbit::initial(orbit, star_mass)
            })
        })
        .collect()
}

impl FormationStrategy for NBodyConfig {
    fn method(&self) -> GenerationMethod {
        GenerationMethod::NBody
    }

    fn form(&self, star: &Star, stream: &mut RandomStream) -> GenerationResult<Vec<PlanetSeed>> {
        self.validate()?;

        let frost_line = star.frost_line();
        let orbits = sample_initial_orbits(self, star, stream);
        let stabilized = stabilize(self, star.mass, &orbits);

        Ok(orbits
            .iter()
            .zip(stabilized.iter())
            .map(|(initial, settled)| PlanetSeed {
                orbital_radius: settled.orbital_radius,
                mass_earth: initial.mass_earth,
                eccentricity: initial.eccentricity,
                kind: classify(initial.mass_earth, settled.orbital_radius, frost_line),
                measured_period: Some(settled.period),
            })
            .collect())
    }
}
