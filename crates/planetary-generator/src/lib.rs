//! Seeded star and planetary system generation
//!
//! Given a seed string, [`generate_universe`] produces a main-sequence star,
//! its planets and their habitability. Planet formation is pluggable through
//! [`PlanetFormationStrategy`]:
//!
//! - **Direct sampling** draws each orbit and mass from observed statistics
//! - **Monte Carlo accretion** merges a swarm of protoplanets
//! - **N-body** settles sampled orbits with a leapfrog integrator

pub mod accretion;
pub mod config;
pub mod direct;
pub mod error;
pub mod generation;
pub mod sampling;
pub mod stabilization;
pub mod strategy;

pub use config::{
    AccretionConfig, DirectSamplingConfig, GenerationConfig, NBodyConfig, NBodyForce,
    PlanetFormationStrategy,
};
pub use error::{GenerationError, GenerationResult};
pub use generation::{generate_planets, generate_universe};
pub use strategy::FormationStrategy;

// Re-export output types for convenience
pub use star_system::{GenerationMethod, SystemMetadata, Universe};

#[cfg(test)]
mod accretion_test;
#[cfg(test)]
mod generation_test;
#[cfg(test)]
mod stabilization_test;
