//! Atmosphere presence and composition
//!
//! An atmosphere exists when the planet is a gas giant or binds molecular
//! hydrogen by the Jeans criterion. Its composition depends on kind and
//! surface temperature.
//!
//! # References
//! - Zahnle & Catling (2017) - "The Cosmic Shoreline"

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::physics::{retains_gas, scale_height};
use units::constants::HYDROGEN_MOLECULE_KG;

/// Reference surface pressure (Pa)
pub const REFERENCE_PRESSURE_PA: f64 = 1.0e5;

/// Mean molar mass of a hydrogen-helium envelope (kg/mol)
pub const GIANT_MOLAR_MASS: f64 = 2.0e-3;
/// Mean molar mass of a secondary (outgassed) atmosphere (kg/mol)
pub const ROCKY_MOLAR_MASS: f64 = 29.0e-3;

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Gas {
    H2,
    He,
    N2,
    O2,
    Ar,
    CO2,
    CH4,
    Other,
}

/// Atmospheric envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Atmosphere {
    /// Surface (or 1-bar reference) pressure in Pa
    pub pressure: f64,
    /// Volume fractions
    pub composition: BTreeMap<Gas, f64>,
    /// Pressure scale height in meters
    pub scale_height: f64,
}

impl Atmosphere {
    /// Build the atmosphere of a planet, or `None` if it cannot hold one.
    ///
    /// # Arguments
    /// * `gas_giant` - Whether the planet is a gas giant
    /// * `temperature` - Surface temperature in K
    /// * `surface_gravity` - Surface gravity in m/s²
    /// * `escape_velocity` - Escape velocity in m/s
    pub fn for_planet(
        gas_giant: bool,
        temperature: f64,
        surface_gravity: f64,
        escape_velocity: f64,
    ) -> Option<Self> {
        if !gas_giant && !retains_gas(escape_velocity, temperature, HYDROGEN_MOLECULE_KG) {
            return None;
        }

        let (fractions, molar_mass): (&[(Gas, f64)], f64) = if gas_giant {
            (&[(Gas::H2, 0.75), (Gas::He, 0.24), (Gas::Other, 0.01)], GIANT_MOLAR_MASS)
        } else if temperature < 200.0 {
            (&[(Gas::N2, 0.5), (Gas::CH4, 0.3), (Gas::CO2, 0.2)], ROCKY_MOLAR_MASS)
        } else if temperature < 350.0 {
            (&[(Gas::N2, 0.78), (Gas::O2, 0.21), (Gas::Ar, 0.01)], ROCKY_MOLAR_MASS)
        } else {
            (&[(Gas::CO2, 0.96), (Gas::N2, 0.04)], ROCKY_MOLAR_MASS)
        };

        Some(Self {
            pressure: REFERENCE_PRESSURE_PA,
            composition: fractions.iter().copied().collect(),
            scale_height: scale_height(temperature, molar_mass, surface_gravity),
        })
    }

    /// Fraction of `gas`, zero if absent
    pub fn fraction(&self, gas: Gas) -> f64 {
        self.composition.get(&gas).copied().unwrap_or(0.0)
    }
}
