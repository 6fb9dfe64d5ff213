//! Direct statistical sampling
//!
//! Walks outward from a sampled innermost orbit, multiplying the radius by a
//! spacing factor at each step and drawing mass and eccentricity per orbit.

use planetary::PlanetSeed;
use seeded_random::RandomStream;
use star_system::GenerationMethod;
use stellar::Star;
use tracing::debug;

use crate::config::DirectSamplingConfig;
use crate::error::GenerationResult;
use crate::sampling::{classify, sample_eccentricity, sample_planet_count, sample_planet_mass};
use crate::strategy::FormationStrategy;

impl FormationStrategy for DirectSamplingConfig {
    fn method(&self) -> GenerationMethod {
        GenerationMethod::DirectSampling
    }

    /// Draw order: count, inner orbit, then per planet mass, eccentricity
    /// and spacing factor.
    fn form(&self, star: &Star, stream: &mut RandomStream) -> GenerationResult<Vec<PlanetSeed>> {
        self.validate()?;

        let frost_line = star.frost_line();
        let count = sample_planet_count(stream, self.planet_rate, self.max_planets);
        let mut orbit = stream.uniform_range(self.inner_orbit_min, self.inner_orbit_max);

        let seeds: Vec<PlanetSeed> = (0..count)
            .map(|_| {
                let beyond_frost_line = orbit > frost_line;
                let mass_earth = sample_planet_mass(stream, beyond_frost_line);
                let eccentricity = sample_eccentricity(stream);
                let seed = PlanetSeed {
                    orbital_radius: orbit,
                    mass_earth,
                    eccentricity,
                    kind: classify(mass_earth, orbit, frost_line),
                    measured_period: None,
                };
                orbit *= stream.uniform_range(self.spacing_min, self.spacing_max);
                seed
            })
            .collect();

        debug!(count, frost_line, "direct sampling formed planets");
        Ok(seeds)
    }
}
