//! Stochastic parameters from species traits and planetary environment
//!
//! Allometric scaling gives lifespan and generation time from body mass;
//! climate variability sets the environmental noise.

use planetary::Planet;
use serde::{Deserialize, Serialize};

use crate::error::{require_non_negative, require_positive, PopulationResult};
use crate::params::StochasticParams;

/// Maximum lifespan coefficient, years per kg^¼
pub const LIFESPAN_COEFFICIENT: f64 = 10.5;
/// Generation time coefficient, years per kg^¼
pub const GENERATION_TIME_COEFFICIENT: f64 = 2.5;
/// Environmental noise per unit of climate variability
pub const ENVIRONMENTAL_NOISE_SCALE: f64 = 0.1;
/// Demographic noise coefficient, kg^½
pub const DEMOGRAPHIC_NOISE_SCALE: f64 = 0.5;

/// Traits of a species relevant to its demography
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesTraits {
    /// Adult body mass (kg)
    pub mass: f64,
    pub trophic_level: f64,
    /// Metabolic rate (W)
    pub metabolism: f64,
}

/// Environmental conditions a population experiences
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    /// Relative primary productivity, 0–1
    pub productivity: f64,
    /// Relative climate variability; 0 is a perfectly steady climate
    pub variability: f64,
}

impl Environment {
    /// Conditions on the surface of `planet`.
    ///
    /// Productivity follows the habitability score. Variability combines the
    /// seasonal swing from obliquity, sin(tilt), with the perihelion to
    /// aphelion insolation swing ((1 + e)/(1 − e))² − 1.
    pub fn from_planet(planet: &Planet) -> Self {
        let seasonal = planet.axial_tilt.to_radians().sin().abs();
        let e = planet.eccentricity.clamp(0.0, 0.99);
        let insolation = ((1.0 + e) / (1.0 - e)).powi(2) - 1.0;
        Self {
            productivity: planet.habitability.score.clamp(0.0, 1.0),
            variability: seasonal + insolation,
        }
    }
}

/// Years to maximum lifespan, 10.5 · m^¼
pub fn max_lifespan(mass: f64) -> f64 {
    LIFESPAN_COEFFICIENT * mass.powf(0.25)
}

/// Years per generation, 2.5 · m^¼
pub fn generation_time(mass: f64) -> f64 {
    GENERATION_TIME_COEFFICIENT * mass.powf(0.25)
}

impl StochasticParams {
    /// Derive demographic parameters from life history.
    ///
    /// Birth rate is one per generation, death rate one per lifespan;
    /// σ_env = 0.1 · variability and σ_demo = 0.5 / √m.
    ///
    /// # Examples
    /// ```
    /// use population::{Environment, SpeciesTraits, StochasticParams};
    ///
    /// let traits = SpeciesTraits { mass: 70.0, trophic_level: 3.0, metabolism: 80.0 };
    /// let env = Environment { productivity: 0.8, variability: 0.5 };
    /// let params = StochasticParams::from_life_history(&traits, &env).unwrap();
    /// assert!(params.birth_rate > params.death_rate);
    /// ```
    pub fn from_life_history(
        traits: &SpeciesTraits,
        environment: &Environment,
    ) -> PopulationResult<Self> {
        require_positive("mass", traits.mass)?;
        require_non_negative("variability", environment.variability)?;

        Self::new(
            1.0 / generation_time(traits.mass),
            1.0 / max_lifespan(traits.mass),
            ENVIRONMENTAL_NOISE_SCALE * environment.variability,
            DEMOGRAPHIC_NOISE_SCALE / traits.mass.sqrt(),
        )
    }
}
