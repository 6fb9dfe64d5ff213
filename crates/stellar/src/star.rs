use serde::{Deserialize, Serialize};

use crate::main_sequence;
use crate::sampling::{MAX_STELLAR_MASS, MIN_STELLAR_MASS};
use crate::spectral::{LuminosityClass, SpectralType};
use crate::zones::{frost_line, HabitableZone};

/// A main-sequence host star
///
/// Created once per generation run and immutable afterwards. Invariants:
/// `0.08 ≤ mass ≤ 100` and `0 ≤ age ≤ lifetime`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Star {
    /// Mass in solar masses (M☉)
    pub mass: f64,
    /// Radius in solar radii (R☉)
    pub radius: f64,
    /// Luminosity in solar luminosities (L☉)
    pub luminosity: f64,
    /// Effective temperature (K)
    pub temperature: f64,
    /// Age (years)
    pub age: f64,
    /// Main-sequence lifetime (years)
    pub lifetime: f64,
    pub spectral_type: SpectralType,
    pub luminosity_class: LuminosityClass,
}

impl Star {
    /// Build a main-sequence star from a mass and an elapsed lifetime fraction.
    ///
    /// The mass is clamped into the IMF range and the fraction into `[0, 1]`,
    /// so the invariants hold for any input.
    ///
    /// # Examples
    /// ```
    /// use stellar::{Star, SpectralType};
    ///
    /// let sun = Star::main_sequence(1.0, 0.46);
    /// assert_eq!(sun.spectral_type, SpectralType::G);
    /// assert!(sun.age <= sun.lifetime);
    /// ```
    pub fn main_sequence(mass: f64, age_fraction: f64) -> Self {
        let mass = if mass.is_finite() { mass } else { 1.0 };
        let mass = mass.clamp(MIN_STELLAR_MASS, MAX_STELLAR_MASS);
        let age_fraction = if age_fraction.is_finite() { age_fraction.clamp(0.0, 1.0) } else { 0.0 };

        let luminosity = main_sequence::luminosity(mass);
        let temperature = main_sequence::temperature(mass);
        let lifetime = main_sequence::lifetime(mass, luminosity);

        Self {
            mass,
            radius: main_sequence::radius(mass),
            luminosity,
            temperature,
            age: lifetime * age_fraction,
            lifetime,
            spectral_type: SpectralType::from_temperature(temperature),
            luminosity_class: LuminosityClass::from_evolution(age_fraction, mass),
        }
    }

    /// A 1 M☉ star at roughly the Sun's present evolutionary stage.
    pub fn solar_analog() -> Self {
        Self::main_sequence(1.0, 0.46)
    }

    /// Elapsed fraction of the main-sequence lifetime
    pub fn age_fraction(&self) -> f64 {
        if self.lifetime > 0.0 {
            self.age / self.lifetime
        } else {
            0.0
        }
    }

    /// Frost line distance in AU
    pub fn frost_line(&self) -> f64 {
        frost_line(self.luminosity)
    }

    pub fn habitable_zone(&self) -> HabitableZone {
        HabitableZone::from_luminosity(self.luminosity)
    }
}
