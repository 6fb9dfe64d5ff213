//! Planar N-body integration around a fixed central star.
//!
//! Units: AU, years and solar masses, so `G = 4π²`.

pub mod body;
pub mod forces;
pub mod integrator;
pub mod orbits;
pub mod state;

#[cfg(test)]
mod integrator_test;
#[cfg(test)]
mod orbits_test;
#[cfg(test)]
mod state_test;

pub use body::{Body, BodyId};
pub use forces::{DirectGravity, ForceModel, StarGravity, G};
pub use integrator::{Integrator, Leapfrog};
pub use orbits::{
    circular_velocity, kepler_period, periapsis_state, semi_major_axis_from_energy, OrbitAverager,
};
pub use state::SystemState;
