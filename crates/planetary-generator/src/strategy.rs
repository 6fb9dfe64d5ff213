//! The formation-strategy seam
//!
//! Each strategy turns a star and a random stream into orbit/mass seeds;
//! characterization and habitability are shared downstream.

use planetary::PlanetSeed;
use seeded_random::RandomStream;
use star_system::GenerationMethod;
use stellar::Star;

use crate::config::PlanetFormationStrategy;
use crate::error::GenerationResult;

/// A planet formation model
pub trait FormationStrategy {
    /// Method recorded in the resulting system's metadata
    fn method(&self) -> GenerationMethod;

    /// Produce planet seeds for `star`, drawing only from `stream`.
    ///
    /// Seeds may come back in any order; callers sort by orbit.
    fn form(&self, star: &Star, stream: &mut RandomStream) -> GenerationResult<Vec<PlanetSeed>>;
}

impl FormationStrategy for PlanetFormationStrategy {
    fn method(&self) -> GenerationMethod {
        PlanetFormationStrategy::method(self)
    }

    fn form(&self, star: &Star, stream: &mut RandomStream) -> GenerationResult<Vec<PlanetSeed>> {
        self.validate()?;
        match self {
            PlanetFormationStrategy::DirectSampling(config) => config.form(star, stream),
            PlanetFormationStrategy::MonteCarloAccretion(config) => config.form(star, stream),
            PlanetFormationStrategy::NBody(config) => config.form(star, stream),
        }
    }
}
