use serde::{Deserialize, Serialize};

use planetary::Planet;
use stellar::Star;

use crate::metadata::{GenerationMethod, SystemMetadata};

/// Score a planet must exceed to be flagged as the system's habitable world
pub const HABITABLE_SCORE_THRESHOLD: f64 = 0.5;

/// Aggregate root of one generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Universe {
    pub seed: String,
    pub metadata: SystemMetadata,
    pub star: Star,
    /// Planets in increasing orbital radius
    pub planets: Vec<Planet>,
    /// Index into `planets` of the first planet scoring above 0.5
    pub habitable_planet: Option<usize>,
}

impl Universe {
    /// Assemble a universe, sorting planets outward and locating the
    /// habitable planet.
    pub fn new(
        seed: impl Into<String>,
        generation_method: GenerationMethod,
        star: Star,
        mut planets: Vec<Planet>,
    ) -> Self {
        let seed = seed.into();
        planets.sort_by(|a, b| a.orbital_radius.total_cmp(&b.orbital_radius));
        let habitable_planet = planets
            .iter()
            .position(|p| p.habitability.score > HABITABLE_SCORE_THRESHOLD);

        Self {
            metadata: SystemMetadata::from_seed(&seed, generation_method),
            seed,
            star,
            planets,
            habitable_planet,
        }
    }

    pub fn habitable_planet(&self) -> Option<&Planet> {
        self.habitable_planet.and_then(|i| self.planets.get(i))
    }

    pub fn planet_count(&self) -> usize {
        self.planets.len()
    }

    pub fn generation_method(&self) -> GenerationMethod {
        self.metadata.generation_method
    }
}
