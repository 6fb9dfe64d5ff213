//! Generation configuration
//!
//! Strategy selection is a single tagged enum chosen once per run; each
//! variant carries the parameters of its formation model. All configs
//! derive serde so callers can load them from any format.

use serde::{Deserialize, Serialize};
use star_system::GenerationMethod;

use crate::error::{require_positive, require_range, GenerationError, GenerationResult};

// =============================================================================
// Direct sampling
// =============================================================================

/// Parameters for per-planet statistical sampling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DirectSamplingConfig {
    /// Poisson mean of the planet count (one planet is always added)
    pub planet_rate: f64,
    pub max_planets: usize,
    /// Innermost orbit range in AU
    pub inner_orbit_min: f64,
    pub inner_orbit_max: f64,
    /// Range of the outward spacing factor between neighbours
    pub spacing_min: f64,
    pub spacing_max: f64,
}

impl Default for DirectSamplingConfig {
    fn default() -> Self {
        Self {
            planet_rate: 2.0,
            max_planets: 10,
            inner_orbit_min: 0.1,
            inner_orbit_max: 0.4,
            spacing_min: 1.4,
            spacing_max: 2.0,
        }
    }
}

impl DirectSamplingConfig {
    pub fn validate(&self) -> GenerationResult<()> {
        require_positive("planetRate", self.planet_rate)?;
        require_planet_cap(self.max_planets)?;
        require_range("innerOrbit", self.inner_orbit_min, self.inner_orbit_max)?;
        require_range("spacing", self.spacing_min, self.spacing_max)?;
        if self.spacing_min <= 1.0 {
            return Err(GenerationError::invalid("spacing", "minimum factor must exceed 1"));
        }
        Ok(())
    }
}

// =============================================================================
// Monte Carlo accretion
// =============================================================================

/// Parameters for the protoplanet merger simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccretionConfig {
    /// Initial number of protoplanets
    pub protoplanets: usize,
    /// Disk mass as a fraction of the stellar mass
    pub disk_mass_fraction: f64,
    /// Disk inner and outer edge in AU
    pub inner_edge: f64,
    pub outer_edge: f64,
    /// Maximum accretion iterations
    pub iterations: usize,
    /// Simulated time per iteration (years)
    pub time_step_years: f64,
    /// Interaction radius in mutual Hill radii
    pub interaction_hill_factor: f64,
    /// Eccentricity random-walk amplitude per 1000 years
    pub eccentricity_stirring: f64,
}

impl Default for AccretionConfig {
    fn default() -> Self {
        Self {
            protoplanets: 200,
            disk_mass_fraction: 0.01,
            inner_edge: 0.05,
            outer_edge: 50.0,
            iterations: 5_000,
            time_step_years: 10_000.0,
            interaction_hill_factor: 3.5,
            eccentricity_stirring: 0.001,
        }
    }
}

impl AccretionConfig {
    pub fn validate(&self) -> GenerationResult<()> {
        if self.protoplanets == 0 {
            return Err(GenerationError::invalid("protoplanets", "must be at least 1"));
        }
        require_positive("diskMassFraction", self.disk_mass_fraction)?;
        require_range("diskEdges", self.inner_edge, self.outer_edge)?;
        require_positive("timeStepYears", self.time_step_years)?;
        require_positive("interactionHillFactor", self.interaction_hill_factor)?;
        if !(self.eccentricity_stirring.is_finite() && self.eccentricity_stirring >= 0.0) {
            return Err(GenerationError::invalid("eccentricityStirring", "must be non-negative"));
        }
        Ok(())
    }
}

// =============================================================================
// N-body stabilization
// =============================================================================

/// Which gravitational interactions the stabilization run includes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NBodyForce {
    /// Each planet feels only the star
    StarOnly,
    /// Star plus planet–planet gravity
    Full,
}

/// Parameters for the N-body stabilization run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NBodyConfig {
    /// Poisson mean of the planet count (one planet is always added)
    pub planet_rate: f64,
    pub max_planets: usize,
    /// The first orbit is `inner_orbit_offset + exponential(inner_orbit_rate)` AU
    pub inner_orbit_offset: f64,
    pub inner_orbit_rate: f64,
    pub force: NBodyForce,
    /// Integration steps per orbit of the innermost planet
    pub steps_per_orbit: usize,
    /// Simulated duration in years
    pub duration_years: f64,
    /// Hard cap on integration steps
    pub max_steps: usize,
    /// Gravitational softening length in AU
    pub softening: f64,
}

impl Default for NBodyConfig {
    fn default() -> Self {
        Self {
            planet_rate: 2.5,
            max_planets: 10,
            inner_orbit_offset: 0.1,
            inner_orbit_rate: 2.0,
            force: NBodyForce::Full,
            steps_per_orbit: 100,
            duration_years: 10.0,
            max_steps: 20_000,
            softening: 1.0e-3,
        }
    }
}

impl NBodyConfig {
    pub fn validate(&self) -> GenerationResult<()> {
        require_positive("planetRate", self.planet_rate)?;
        require_planet_cap(self.max_planets)?;
        require_positive("innerOrbitOffset", self.inner_orbit_offset)?;
        require_positive("innerOrbitRate", self.inner_orbit_rate)?;
        require_positive("durationYears", self.duration_years)?;
        if self.steps_per_orbit == 0 || self.max_steps == 0 {
            return Err(GenerationError::invalid("steps", "step counts must be at least 1"));
        }
        if !(self.softening.is_finite() && self.softening >= 0.0) {
            return Err(GenerationError::invalid("softening", "must be non-negative"));
        }
        Ok(())
    }
}

fn require_planet_cap(max_planets: usize) -> GenerationResult<()> {
    if max_planets == 0 {
        Err(GenerationError::invalid("maxPlanets", "must be at least 1"))
    } else {
        Ok(())
    }
}

// =============================================================================
// Strategy selection
// =============================================================================

/// Planet formation model, chosen once at the start of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "camelCase")]
pub enum PlanetFormationStrategy {
    DirectSampling(DirectSamplingConfig),
    MonteCarloAccretion(AccretionConfig),
    NBody(NBodyConfig),
}

impl PlanetFormationStrategy {
    pub fn method(&self) -> GenerationMethod {
        match self {
            PlanetFormationStrategy::DirectSampling(_) => GenerationMethod::DirectSampling,
            PlanetFormationStrategy::MonteCarloAccretion(_) => GenerationMethod::MonteCarloAccretion,
            PlanetFormationStrategy::NBody(_) => GenerationMethod::NBody,
        }
    }

    pub fn validate(&self) -> GenerationResult<()> {
        match self {
            PlanetFormationStrategy::DirectSampling(c) => c.validate(),
            PlanetFormationStrategy::MonteCarloAccretion(c) => c.validate(),
            PlanetFormationStrategy::NBody(c) => c.validate(),
        }
    }
}

impl Default for PlanetFormationStrategy {
    fn default() -> Self {
        PlanetFormationStrategy::DirectSampling(DirectSamplingConfig::default())
    }
}

/// Top-level generation options
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationConfig {
    pub strategy: PlanetFormationStrategy,
}

impl GenerationConfig {
    pub fn direct_sampling() -> Self {
        Self {
            strategy: PlanetFormationStrategy::DirectSampling(DirectSamplingConfig::default()),
        }
    }

    pub fn monte_carlo_accretion() -> Self {
        Self {
            strategy: PlanetFormationStrategy::MonteCarloAccretion(AccretionConfig::default()),
        }
    }

    pub fn n_body() -> Self {
        Self {
            strategy: PlanetFormationStrategy::NBody(NBodyConfig::default()),
        }
    }

    pub fn validate(&self) -> GenerationResult<()> {
        self.strategy.validate()
    }
}
