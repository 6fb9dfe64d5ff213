//! Planetary characterization
//!
//! Turns an orbit and a mass into a complete [`Planet`]: radius, bulk
//! physics, layered composition, atmosphere, magnetic field, spin and a
//! habitability assessment against its host [`stellar::Star`].

pub mod atmosphere;
pub mod composition;
pub mod habitability;
pub mod physics;
pub mod planet;

// Re-export key types at crate root
pub use atmosphere::{Atmosphere, Gas};
pub use composition::{Composition, Element, Layer, Layers};
pub use habitability::{assess, Habitability};
pub use planet::{planet_letter, Planet, PlanetKind, PlanetSeed};

#[cfg(test)]
mod habitability_test;
#[cfg(test)]
mod physics_test;
