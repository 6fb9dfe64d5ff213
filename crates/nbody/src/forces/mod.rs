//! Force models for N-body simulations

use crate::state::SystemState;
use nalgebra::Vector2;

pub mod gravity;


pub use gravity::{hill_radius, mutual_hill_radius, DirectGravity, StarGravity};

/// Gravitational constant in AU³ M☉⁻¹ year⁻²
pub const G: f64 = units::constants::G_AU_SOLAR_YEAR;

/// A source of acceleration on bodies in an N-body system
pub trait ForceModel: Send + Sync {
    /// Acceleration in AU/year² on the body at `idx` in `state.bodies`
    fn acceleration(&self, idx: usize, state: &SystemState) -> Vector2<f64>;

    /// Potential energy in M☉ AU² year⁻²
    fn potential_energy(&self, state: &SystemState) -> f64;
}
