//! Stochastic population dynamics
//!
//! [`StochasticPopulationEngine`] advances populations under SDE models
//! (predator–prey, multi-species competition) or the exact Gillespie
//! birth–death process, with catastrophe and Allee-effect modifiers.
//! [`PopulationViabilityAnalyzer`] runs many engine trajectories to estimate
//! extinction risk and the minimum viable population.
//!
//! Parameters can be derived from a species' body mass and a planet's
//! climate through [`StochasticParams::from_life_history`] and
//! [`Environment::from_planet`].

pub mod engine;
pub mod error;
pub mod life_history;
pub mod params;
pub mod state;
pub mod viability;


pub use engine::{
    allee_growth_rate, analytic_extinction_probability, StochasticPopulationEngine,
    MAX_QSD_CAPACITY, POPULATION_SCOPE,
};
pub use error::{PopulationError, PopulationResult};
pub use life_history::{generation_time, max_lifespan, Environment, SpeciesTraits};
pub use params::{CompetitionParams, PredatorPreyParams, StochasticParams};
pub use state::{PopulationPhase, PopulationState, PredatorPreyPoint, TrajectoryPoint};
pub use viability::{PopulationViabilityAnalyzer, ViabilityConfig, ViabilityReport};
