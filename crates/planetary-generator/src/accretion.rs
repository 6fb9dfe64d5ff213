//! Monte Carlo accretion
//!
//! Protoplanets are scattered through a minimum-mass nebula disk,
//! Σ(r) ∝ r^-1.5. Each iteration finds neighbouring bodies
//! inside their interaction radius, visits those pairs in a seed-shuffled
//! order and merges them stochastically. Survivors become planets.
//!
//! Masses are tracked in solar masses so Hill radii can use the star's mass
//! directly.

use nbody::forces::mutual_hill_radius;
use planetary::{PlanetKind, PlanetSeed};
use seeded_random::RandomStream;
use star_system::GenerationMethod;
use stellar::Star;
use tracing::{debug, trace};
use units::Mass;

use crate::config::AccretionConfig;
use crate::error::GenerationResult;
use crate::sampling::log_uniform;
use crate::strategy::FormationStrategy;

/// Solid mass per log-interval of orbit for a Σ ∝ r^-1.5 disk
const SOLIDS_PER_LOG_INTERVAL: f64 = 0.5;
/// Collisions damp the merged eccentricity by this factor
const MERGE_DAMPING: f64 = 0.7;
const MAX_MERGED_ECCENTRICITY: f64 = 0.3;
const MAX_STIRRED_ECCENTRICITY: f64 = 0.5;
/// Bodies whose bulk is more than half gas are giants
const GAS_GIANT_FRACTION: f64 = 0.5;

/// Bulk rock/ice/gas mass fractions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulkComposition {
    pub rock: f64,
    pub ice: f64,
    pub gas: f64,
}

impl BulkComposition {
    /// Condensation regime at `orbit` relative to the frost line
    pub fn at_orbit(orbit: f64, frost_line: f64) -> Self {
        let (rock, ice, gas) = if orbit < 0.5 * frost_line {
            (0.95, 0.0, 0.05)
        } else if orbit < frost_line {
            (0.7, 0.2, 0.1)
        } else if orbit < 3.0 * frost_line {
            (0.3, 0.5, 0.2)
        } else {
            (0.1, 0.2, 0.7)
        };
        Self { rock, ice, gas }
    }

    fn mix(a: Self, mass_a: f64, b: Self, mass_b: f64) -> Self {
        let total = mass_a + mass_b;
        let weigh = |x: f64, y: f64| (x * mass_a + y * mass_b) / total;
        Self {
            rock: weigh(a.rock, b.rock),
            ice: weigh(a.ice, b.ice),
            gas: weigh(a.gas, b.gas),
        }
    }
}

/// A body in the accreting disk
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Protoplanet {
    /// Semi-major axis (AU)
    pub orbit: f64,
    /// Mass (M☉)
    pub mass: f64,
    pub eccentricity: f64,
    pub bulk: BulkComposition,
}

impl Protoplanet {
    pub fn mass_earth(&self) -> f64 {
        Mass::from_solar_masses(self.mass).to_earth_masses()
    }
}

/// Result of an accretion run
#[derive(Debug, Clone, PartialEq)]
pub struct AccretionOutcome {
    /// Survivors, sorted by orbit
    pub bodies: Vec<Protoplanet>,
    pub merges: usize,
    pub iterations: usize,
    pub elapsed_years: f64,
}

/// Scatter the initial protoplanets.
///
/// Orbits are log-uniform across the disk. Each body's share of the disk
/// mass scales as r^0.5, the solids per logarithmic interval of a Σ ∝ r^-1.5
/// disk, times a Log-normal(0, 0.5) scatter; shares are normalized so the
/// bodies carry exactly the disk mass. Per body: orbit, scatter, eccentricity.
pub fn initialize_disk(
    config: &AccretionConfig,
    star: &Star,
    stream: &mut RandomStream,
) -> Vec<Protoplanet> {
    let disk_mass = config.disk_mass_fraction * star.mass;
    let frost_line = star.frost_line();

    let placed: Vec<(f64, f64, f64)> = (0..config.protoplanets)
        .map(|_| {
            let orbit = log_uniform(stream, config.inner_edge, config.outer_edge);
            let share = orbit.powf(SOLIDS_PER_LOG_INTERVAL) * stream.log_normal(0.0, 0.5);
            let eccentricity = stream.beta(1.0, 10.0);
            (orbit, share, eccentricity)
        })
        .collect();
    let total_share: f64 = placed.iter().map(|(_, share, _)| share).sum();

    placed
        .into_iter()
        .map(|(orbit, share, eccentricity)| Protoplanet {
            orbit,
            mass: disk_mass * share / total_share,
            eccentricity,
            bulk: BulkComposition::at_orbit(orbit, frost_line),
        })
        .collect()
}

/// Merge two bodies, conserving mass.
///
/// The orbit and bulk composition are mass-weighted; the eccentricity is the
/// damped mass-weighted mean.
pub fn merge(a: &Protoplanet, b: &Protoplanet) -> Protoplanet {
    let mass = a.mass + b.mass;
    let weighted = |x: f64, y: f64| (x * a.mass + y * b.mass) / mass;
    Protoplanet {
        orbit: weighted(a.orbit, b.orbit),
        mass,
        eccentricity: (weighted(a.eccentricity, b.eccentricity) * MERGE_DAMPING)
            .min(MAX_MERGED_ECCENTRICITY),
        bulk: BulkComposition::mix(a.bulk, a.mass, b.bulk, b.mass),
    }
}

/// Neighbouring pairs inside their interaction radius, with merge chances.
///
/// `bodies` must be sorted by orbit. The interaction radius is
/// `hill_factor` mutual Hill radii; the chance of merging rises as the gap
/// closes and with the pair's mean eccentricity.
pub fn interaction_candidates(
    bodies: &[Protoplanet],
    star_mass: f64,
    hill_factor: f64,
) -> Vec<(usize, usize, f64)> {
    bodies
        .windows(2)
        .enumerate()
        .filter_map(|(i, pair)| {
            let (inner, outer) = (&pair[0], &pair[1]);
            let reach = hill_factor
                * mutual_hill_radius(inner.mass, inner.orbit, outer.mass, outer.orbit, star_mass);
            let gap = outer.orbit - inner.orbit;
            (gap < reach).then(|| {
                let mean_e = 0.5 * (inner.eccentricity + outer.eccentricity);
                let p = (1.0 - gap / reach + mean_e).clamp(0.0, 1.0);
                (i, i + 1, p)
            })
        })
        .collect()
}

fn sort_by_orbit(bodies: &mut [Protoplanet]) {
    bodies.sort_by(|a, b| a.orbit.total_cmp(&b.orbit));
}

/// Run the merger loop on `bodies`.
///
/// Stops after `config.iterations` or as soon as no pair can interact. Each
/// body merges at most once per iteration. Per iteration the stream is used
/// for the pair shuffle, one merge roll per candidate, then one stirring
/// draw per surviving body.
pub fn run_accretion(
    config: &AccretionConfig,
    star_mass: f64,
    mut bodies: Vec<Protoplanet>,
    stream: &mut RandomStream,
) -> AccretionOutcome {
    let stir_sigma = config.eccentricity_stirring * config.time_step_years / 1_000.0;
    let mut merges = 0;
    let mut iterations = 0;

    sort_by_orbit(&mut bodies);

    while iterations < config.iterations && bodies.len() > 1 {
        let mut candidates =
            interaction_candidates(&bodies, star_mass, config.interaction_hill_factor);
        if candidates.is_empty() {
            break;
        }
        iterations += 1;
        stream.shuffle(&mut candidates);

        let mut consumed = vec![false; bodies.len()];
        let mut merged = Vec::new();
        for (i, j, p) in candidates {
            let roll = stream.chance(p);
            if roll && !consumed[i] && !consumed[j] {
                consumed[i] = true;
                consumed[j] = true;
                merged.push(merge(&bodies[i], &bodies[j]));
            }
        }
        merges += merged.len();

        bodies = bodies
            .iter()
            .zip(consumed.iter())
            .filter(|(_, gone)| !**gone)
            .map(|(b, _)| *b)
            .chain(merged)
            .collect();

        for body in bodies.iter_mut() {
            let stirred = body.eccentricity + stream.normal(0.0, stir_sigma);
            body.eccentricity = stirred.clamp(0.0, MAX_STIRRED_ECCENTRICITY);
        }
        sort_by_orbit(&mut bodies);

        trace!(iterations, survivors = bodies.len(), "accretion step");
    }

    AccretionOutcome {
        bodies,
        merges,
        iterations,
        elapsed_years: iterations as f64 * config.time_step_years,
    }
}

/// Kind of a surviving body: gas-dominated bulk or a runaway core.
pub fn classify_survivor(body: &Protoplanet, frost_line: f64) -> PlanetKind {
    if body.bulk.gas > GAS_GIANT_FRACTION {
        PlanetKind::GasGiant
    } else {
        PlanetKind::classify(body.mass_earth(), body.orbit, frost_line)
    }
}

impl FormationStrategy for AccretionConfig {
    fn method(&self) -> GenerationMethod {
        GenerationMethod::MonteCarloAccretion
    }

    fn form(&self, star: &Star, stream: &mut RandomStream) -> GenerationResult<Vec<PlanetSeed>> {
        self.validate()?;

        let bodies = initialize_disk(self, star, stream);
        let outcome = run_accretion(self, star.mass, bodies, stream);
        let frost_line = star.frost_line();

        debug!(
            survivors = outcome.bodies.len(),
            merges = outcome.merges,
            iterations = outcome.iterations,
            elapsed_years = outcome.elapsed_years,
            "accretion finished"
        );

        Ok(outcome
            .bodies
            .iter()
            .map(|body| PlanetSeed {
                orbital_radius: body.orbit,
                mass_earth: body.mass_earth(),
                eccentricity: body.eccentricity,
                kind: classify_survivor(body, frost_line),
                measured_period: None,
            })
            .collect())
    }
}
